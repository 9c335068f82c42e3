use crate::error::ParseError;
use crate::types::SpecDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub document: SpecDocument,
    /// The format that actually decoded; never `Auto`.
    pub format: DocumentFormat,
}

/// Parses a spec document.
///
/// `Auto` guesses from the first non-blank character and falls back to the other format.
/// When both attempts fail, the error of the guessed format is returned.
pub fn parse_document_str(input: &str, format: DocumentFormat) -> Result<ParsedDocument, ParseError> {
    let (first, fallback) = match format {
        DocumentFormat::Auto if looks_like_json(input) => {
            (DocumentFormat::Json, Some(DocumentFormat::Yaml))
        }
        DocumentFormat::Auto => (DocumentFormat::Yaml, Some(DocumentFormat::Json)),
        explicit => (explicit, None),
    };

    match decode(input, first) {
        Ok(document) => Ok(ParsedDocument { document, format: first }),
        Err(err) => match fallback {
            Some(format) => decode(input, format)
                .map(|document| ParsedDocument { document, format })
                .map_err(|_| err),
            None => Err(err),
        },
    }
}

fn looks_like_json(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('{' | '['))
}

fn decode(input: &str, format: DocumentFormat) -> Result<SpecDocument, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(input)?),
        DocumentFormat::Yaml | DocumentFormat::Auto => Ok(serde_yaml::from_str(input)?),
    }
}
