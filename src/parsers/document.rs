use roxmltree::{Document, Node, ParsingOptions};

use crate::models::HistoryEntry;

/// Strictly parse a history document and flatten it into entries
///
/// Every element, root included, contributes one entry in document
/// (pre-order) order. An entry maps each direct child element's tag to the
/// text that precedes that child's own first child element.
///
/// `<root><loan><amount>500</amount></loan></root>` flattens to
/// `[{loan: None}, {amount: "500"}, {}]`.
///
/// # Errors
///
/// Returns the parser error for documents that are not well-formed.
pub fn parse_history_document(content: &str) -> Result<Vec<HistoryEntry>, roxmltree::Error> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let document = Document::parse_with_options(content, options)?;

    Ok(document
        .root_element()
        .descendants()
        .filter(|node| node.is_element())
        .map(element_entry)
        .collect())
}

fn element_entry(element: Node<'_, '_>) -> HistoryEntry {
    element
        .children()
        .filter(|child| child.is_element())
        .map(|child| (qualified_name(child), leading_text(child)))
        .collect()
}

/// Text of `element` before its first child element
///
/// Comments and processing instructions are skipped and the text around them
/// is joined. `None` when no text node precedes the first child element.
fn leading_text(element: Node<'_, '_>) -> Option<String> {
    element
        .children()
        .take_while(|node| !node.is_element())
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .fold(None, |text: Option<String>, part| Some(text.unwrap_or_default() + part))
}

/// Tag name in `{namespace}local` form when the element is namespaced
fn qualified_name(element: Node<'_, '_>) -> String {
    let tag = element.tag_name();
    match tag.namespace() {
        Some(namespace) => format!("{{{}}}{}", namespace, tag.name()),
        None => tag.name().to_string(),
    }
}
