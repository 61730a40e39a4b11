use std::borrow::Cow;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// `encoding` pseudo-attribute of a leading XML declaration
static DECLARED_ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)^\s*<\?xml\s(?:[^>]*?\s)?encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("declared encoding pattern is valid")
});

/// Character encoding of a raw document and the length of its byte order mark
///
/// A byte order mark wins over the XML declaration; without either the
/// document is UTF-8.
fn detect_encoding(bytes: &[u8]) -> Result<(&'static Encoding, usize)> {
    if let Some(found) = Encoding::for_bom(bytes) {
        return Ok(found);
    }

    let Some(captures) = DECLARED_ENCODING.captures(bytes) else {
        return Ok((UTF_8, 0));
    };
    match Encoding::for_label(&captures[1]) {
        Some(encoding) => Ok((encoding, 0)),
        None => bail!("Unsupported document encoding: {}", String::from_utf8_lossy(&captures[1])),
    }
}

/// Decode a history document in the encoding it declares
///
/// # Errors
///
/// Returns an error for an unknown encoding label or for bytes that are not
/// valid in the detected encoding.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let (encoding, bom_length) = detect_encoding(bytes)?;

    match encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_length..]) {
        Some(text) => Ok(text),
        None => bail!("Malformed {} byte sequence", encoding.name()),
    }
}

/// Decode a history document, replacing malformed sequences with U+FFFD
///
/// Falls back to UTF-8 when the declared encoding is unknown.
pub fn decode_document_lossy(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, bom_length) = detect_encoding(bytes).unwrap_or((UTF_8, 0));
    let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
    text
}
