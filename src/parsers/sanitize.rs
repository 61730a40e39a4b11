use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Predefined XML entity references, or a lone ampersand
static AMPERSAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|apos);|&").expect("ampersand pattern is valid")
});

/// Escape every `&` that does not start one of the five predefined entity references
///
/// Numeric character references such as `&#169;` are escaped as well and end up
/// as literal text after parsing.
pub fn escape_bare_ampersands(content: &str) -> Cow<'_, str> {
    AMPERSAND.replace_all(content, |caps: &Captures| match &caps[0] {
        "&" => "&amp;".to_string(),
        entity => entity.to_string(),
    })
}

/// Decode the five predefined entity references
pub(crate) fn unescape_predefined(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&"),
    )
}
