use super::html::{Element, Node};
use super::row::evaluation_row;
use crate::models::evaluations::entities::EvaluationRecord;
use crate::models::weights::entities::WeightConfiguration;
use crate::utils::format_points;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org";
const BULMA_HREF: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";

const TABLE_HEADERS: [&str; 11] = [
    "Gewertet",
    "Vorname",
    "Nachname",
    "HV-Punkte",
    "HV-Prozent",
    "HV-Note",
    "LV-Punkte",
    "LV-Prozent",
    "LV-Note",
    "Gesamt-Prozent",
    "Gesamt-Note",
];

/// 首页所需的全部数据
#[derive(Debug, Clone)]
pub struct IndexPage<'a> {
    pub exam_title: &'a str,
    pub records: &'a [EvaluationRecord],
    pub weights: WeightConfiguration,
    /// 上一次提交被拒绝时显示的提示
    pub notice: Option<String>,
}

pub fn render_index_page(page: &IndexPage<'_>) -> String {
    let html = Element::new("html")
        .attr("lang", "de")
        .child(head(page.exam_title))
        .child(
            Element::new("body")
                .child(navbar())
                .child(content(page))
                .child(footer()),
        );

    let mut out = Node::Raw("<!DOCTYPE html>".to_string()).render();
    out.push_str(&html.render());
    out
}

fn head(title: &str) -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(title))
        .child(Element::new("script").attr("src", HTMX_SRC))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", BULMA_HREF),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "/static/app.css"),
        )
}

fn navbar() -> Element {
    Element::new("header")
        .class("navbar")
        .attr("role", "navigation")
        .attr("aria-label", "main navigation")
        .child(
            Element::new("div")
                .class("navbar-menu")
                .child(
                    Element::new("div").class("navbar-start").child(
                        Element::new("a")
                            .class("navbar-item")
                            .attr("href", "/")
                            .text("Home"),
                    ),
                )
                .child(
                    Element::new("div").class("navbar-end").child(
                        Element::new("span").class("navbar-item").child(
                            Element::new("button")
                                .class("button is-primary")
                                .attr("hx-trigger", "click")
                                .attr("hx-get", "/end")
                                .attr("hx-target", "body")
                                .text("Beenden"),
                        ),
                    ),
                ),
        )
}

fn content(page: &IndexPage<'_>) -> Element {
    let mut inner = Element::new("div")
        .class("content tile is-parent is-vertical gap")
        .child(Element::new("h1").class("title").text("Bewertungen"));

    if let Some(notice) = &page.notice {
        inner = inner.child(
            Element::new("div")
                .class("notification is-warning is-rejection")
                .text(notice.clone()),
        );
    }

    inner = inner
        .child(entry_form(&page.weights))
        .child(records_table(page.records))
        .child(
            Element::new("div").child(
                Element::new("a")
                    .class("button")
                    .attr("href", "/export")
                    .text("export"),
            ),
        );

    Element::new("div").class("container is-widescreen").child(
        Element::new("div")
            .class("card tile is-vertical is-ancestor")
            .child(
                Element::new("header").class("card-header").child(
                    Element::new("p")
                        .class("card-header-title")
                        .text(page.exam_title),
                ),
            )
            .child(Element::new("div").class("card-content").child(inner)),
    )
}

/// 配置字段：未配置时为空输入框，配置后填入当前值并设为只读
fn weight_inputs(weights: &WeightConfiguration) -> Element {
    let configured = weights.is_configured();
    let fields = [
        ("hv_max", "HV-Max-Punkte", weights.hv_max),
        ("hv_gewichtung", "HV-Gewichtung in %", weights.hv_weight),
        ("lv_max", "LV-Max-Punkte", weights.lv_max),
        ("lv_gewichtung", "LV-Gewichtung in %", weights.lv_weight),
    ];

    Element::new("div")
        .class("tile is-ancestor")
        .children(fields.into_iter().map(|(name, placeholder, value)| {
            let input = text_input(name, placeholder);
            let input = if configured {
                input.attr("value", format_points(value)).flag("readonly", true)
            } else {
                input
            };
            Element::new("div").class("tile field is-parent").child(input)
        }))
}

fn entry_form(weights: &WeightConfiguration) -> Element {
    let fields = [
        ("vorname", "Vorname"),
        ("nachname", "Nachname"),
        ("hv_punkte", "HV-Punkte"),
        ("lv_punkte", "LV-Punkte"),
    ];

    let entry_row = Element::new("div")
        .class("tile is-ancestor")
        .children(fields.into_iter().map(|(name, placeholder)| {
            Element::new("div")
                .class("tile field is-parent")
                .child(text_input(name, placeholder))
        }))
        .child(
            Element::new("div").class("tile field is-parent").child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("button tile is-child")
                    .text("Add"),
            ),
        );

    Element::new("form")
        .attr("method", "post")
        .attr("action", "/add")
        .child(weight_inputs(weights))
        .child(entry_row)
}

fn text_input(name: &'static str, placeholder: &'static str) -> Element {
    Element::new("input")
        .class("input is-child")
        .attr("type", "text")
        .attr("name", name)
        .attr("placeholder", placeholder)
}

fn records_table(records: &[EvaluationRecord]) -> Element {
    let header_row = Element::new("tr").children(
        TABLE_HEADERS
            .iter()
            .map(|header| Element::new("th").text(*header)),
    );

    Element::new("div").class("table-container").child(
        Element::new("table")
            .class("table is-hoverable")
            .child(Element::new("thead").child(header_row))
            .child(Element::new("tbody").children(records.iter().map(evaluation_row))),
    )
}

fn footer() -> Element {
    Element::new("footer").class("footer").child(
        Element::new("div")
            .class("content has-text-centered")
            .child(Element::new("p").text("© 2023 Alle Rechte vorbehalten.")),
    )
}
