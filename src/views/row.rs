use super::html::Element;
use crate::models::evaluations::entities::EvaluationRecord;
use crate::utils::format_points;

/// 表格行的 DOM ID，切换计入状态后用于局部替换
pub fn row_dom_id(id: i64) -> String {
    format!("bewertung-{id}")
}

/// 一条成绩记录对应的表格行
pub fn evaluation_row(record: &EvaluationRecord) -> Element {
    let dom_id = row_dom_id(record.id);

    let checkbox = Element::new("input")
        .attr("type", "checkbox")
        .flag("checked", record.counted)
        .attr("hx-post", format!("/toggle/{}", record.id))
        .attr("hx-target", format!("#{dom_id}"))
        .attr("hx-swap", "outerHTML");

    let cells = [
        record.first_name.clone(),
        record.last_name.clone(),
        format_points(record.hv_points),
        format_points(record.hv_percent),
        record.hv_grade.to_string(),
        format_points(record.lv_points),
        format_points(record.lv_percent),
        record.lv_grade.to_string(),
        format_points(record.overall_percent),
        record.overall_grade.to_string(),
    ];

    let row = Element::new("tr").id(dom_id);
    let row = if record.counted {
        row
    } else {
        row.class("is-not-counted")
    };

    row.child(Element::new("td").child(checkbox))
        .children(cells.into_iter().map(|cell| Element::new("td").text(cell)))
}
