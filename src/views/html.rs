//! 极简的 HTML 节点树与渲染

/// 不需要闭合标签的元素
const VOID_TAGS: &[&str] = &["input", "meta", "link", "br", "hr", "img"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// 文本，渲染时转义
    Text(String),
    /// 原样输出
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    /// 布尔属性，例如 `checked`、`readonly`
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_to(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Node {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_to(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(raw) => out.push_str(raw),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_escapes_text_and_attrs() {
        let html = Element::new("div")
            .attr("data-x", "a&b")
            .text("<Anna> \"Muster\"")
            .render();
        assert_eq!(
            html,
            "<div data-x=\"a&amp;b\">&lt;Anna&gt; &quot;Muster&quot;</div>"
        );
    }

    #[test]
    fn test_void_and_flag_attributes() {
        let html = Element::new("input")
            .attr("type", "checkbox")
            .flag("checked", true)
            .flag("disabled", false)
            .render();
        assert_eq!(html, "<input type=\"checkbox\" checked>");
    }

    #[test]
    fn test_nested_children_and_raw() {
        let html = Element::new("tr")
            .children(["a", "b"].iter().map(|t| Element::new("td").text(*t)))
            .render();
        assert_eq!(html, "<tr><td>a</td><td>b</td></tr>");
        assert_eq!(Node::Raw("<!DOCTYPE html>".into()).render(), "<!DOCTYPE html>");
    }
}
