#![forbid(unsafe_code)]

pub mod error;
pub mod naming;
pub mod parser;
pub mod types;

pub use crate::error::ParseError;
pub use crate::naming::{endpoint_name, humanize, is_http_method, sanitize_identifier};
pub use crate::parser::{parse_document_str, DocumentFormat, ParsedDocument};
pub use crate::types::SpecDocument;
