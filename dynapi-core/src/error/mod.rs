use thiserror::Error;

/// The document could not be parsed into a [`crate::SpecDocument`].
///
/// Missing required top-level keys and type mismatches surface here; cross references
/// (placeholders vs. parameters) are never checked at parse time.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed spec document (JSON): {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed spec document (YAML): {0}")]
    Yaml(#[from] serde_yaml::Error),
}
