use scraper::{Html, Node as HtmlNode};

use crate::node::Dom;

/// Seeds a tree from fixture HTML. Comments, doctypes, and whitespace-only
/// text are dropped; element and text structure survives in document order.
pub(crate) fn dom_from_html(html: &str) -> Dom {
    let parsed = Html::parse_document(html);
    let mut dom = Dom::new();
    let mut stack: Vec<_> = parsed
        .tree
        .root()
        .children()
        .map(|child| (dom.root(), child))
        .collect();
    stack.reverse();

    while let Some((parent, node)) = stack.pop() {
        match node.value() {
            HtmlNode::Element(el) => {
                let id = dom.create_element(el.name());
                for (name, value) in el.attrs() {
                    dom.set_attr(id, name, value);
                }
                dom.append_child(parent, id);
                let children: Vec<_> = node.children().map(|child| (id, child)).collect();
                for entry in children.into_iter().rev() {
                    stack.push(entry);
                }
            }
            HtmlNode::Text(text) => {
                let value: &str = text;
                if !value.trim().is_empty() {
                    let id = dom.create_text(value);
                    dom.append_child(parent, id);
                }
            }
            _ => {}
        }
    }

    dom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_element_order_and_attributes() {
        let dom = dom_from_html(
            "<html><body><div class=\"css-1a7dy9c eu6qb932\"><em>first</em><em>last</em></div></body></html>",
        );
        let root = dom.root();
        let div = dom
            .descendants(root)
            .into_iter()
            .find(|id| dom.has_class(*id, "eu6qb932"))
            .expect("container parsed");
        let ems: Vec<String> = dom
            .children(div)
            .iter()
            .filter(|id| dom.tag(**id) == Some("em"))
            .map(|id| dom.text_content(*id))
            .collect();
        assert_eq!(ems, vec!["first", "last"]);
    }

    #[test]
    fn drops_whitespace_only_text() {
        let dom = dom_from_html("<html><body><div>  \n  <em>x</em></div></body></html>");
        let root = dom.root();
        let div = dom
            .descendants(root)
            .into_iter()
            .find(|id| dom.tag(*id) == Some("div"))
            .expect("div parsed");
        assert_eq!(dom.children(div).len(), 1);
    }
}
