//! Parsers for credit-history XML documents
//!
//! # Error Handling Strategy
//!
//! History files are expected to be corrupted now and then, so nothing here returns an
//! error to the lookup layer:
//!
//! - **Strict parse**: [`parse_history_file`] decodes the file in its declared encoding
//!   and parses it with a conforming XML parser. Success is reported as-is.
//!
//! - **Sanitize-and-retry**: on failure, [`recover_history_file`] re-reads the raw bytes,
//!   escapes stray `&` characters and parses again. Success here is silent.
//!
//! - **Salvage**: if the sanitized text is still malformed, a tokenizer walk keeps every
//!   element it could read before the first fatal problem, and a partial-parse diagnostic
//!   entry is appended.
//!
//! - **Final diagnostic**: [`load_credit_history`] appends a corrupted-file entry (with a
//!   remediation hint) after any strict-parse failure, so operators see both failure reasons.

pub mod document;
pub mod encoding;
pub mod history;
pub mod salvage;
pub mod sanitize;

pub use document::parse_history_document;
pub use encoding::{decode_document, decode_document_lossy};
pub use history::{load_credit_history, parse_history_file, recover_history_file};
pub use salvage::salvage_entries;
pub use sanitize::escape_bare_ampersands;
