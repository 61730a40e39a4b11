use xmlparser::{ElementEnd, Token, Tokenizer};

use super::sanitize::unescape_predefined;
use crate::models::HistoryEntry;

/// Element that has been opened but not closed yet
struct OpenElement {
    name: String,
    /// Index of this element's own entry
    slot: usize,
    /// Set once a child element starts; later text is no longer this element's text
    has_children: bool,
    text: Option<String>,
}

/// Extract what can be read from a document that failed strict parsing
///
/// Walks the token stream and builds the same pre-order entries as a strict
/// parse for every element opened before the first fatal problem: a
/// tokenizer error, a mismatched closing tag, or the input ending with
/// elements still open. Entries of elements cut off mid-way keep the children
/// seen so far. Prefixed tags are reported as `prefix:local`, since
/// namespaces are not resolved here.
pub fn salvage_entries(content: &str) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();

    for token in Tokenizer::from(content) {
        let token = match token {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!(error = %e, salvaged = entries.len(), "Stopped salvaging at tokenizer error");
                return entries;
            }
        };

        match token {
            Token::ElementStart { prefix, local, .. } => {
                let name = qualified_name(prefix.as_str(), local.as_str());
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                    entries[parent.slot].insert(name.clone(), None);
                }
                entries.push(HistoryEntry::new());
                stack.push(OpenElement {
                    name,
                    slot: entries.len() - 1,
                    has_children: false,
                    text: None,
                });
            }
            Token::ElementEnd { end: ElementEnd::Empty, .. } => {
                stack.pop();
            }
            Token::ElementEnd { end: ElementEnd::Close(prefix, local), .. } => {
                let name = qualified_name(prefix.as_str(), local.as_str());
                match stack.last() {
                    Some(open) if open.name == name => {
                        stack.pop();
                    }
                    _ => {
                        tracing::debug!(
                            tag = %name,
                            salvaged = entries.len(),
                            "Stopped salvaging at mismatched closing tag"
                        );
                        return entries;
                    }
                }
            }
            Token::Text { text } => {
                append_text(&mut entries, &mut stack, &unescape_predefined(text.as_str()));
            }
            Token::Cdata { text, .. } => {
                append_text(&mut entries, &mut stack, text.as_str());
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        tracing::debug!(
            open = stack.len(),
            salvaged = entries.len(),
            "Document ended with unclosed elements"
        );
    }

    entries
}

/// Record text for the innermost open element, in its parent's entry
fn append_text(entries: &mut [HistoryEntry], stack: &mut [OpenElement], text: &str) {
    let Some((current, ancestors)) = stack.split_last_mut() else {
        return;
    };
    if current.has_children {
        return;
    }

    current.text.get_or_insert_with(String::new).push_str(text);

    if let Some(parent) = ancestors.last() {
        entries[parent.slot].insert(current.name.clone(), current.text.clone());
    }
}

fn qualified_name(prefix: &str, local: &str) -> String {
    if prefix.is_empty() { local.to_string() } else { format!("{}:{}", prefix, local) }
}
