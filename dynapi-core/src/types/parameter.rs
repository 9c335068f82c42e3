use std::fmt;

use crate::types::{InputKind, Schema};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => f.write_str("path"),
            ParameterLocation::Query => f.write_str("query"),
            ParameterLocation::Header => f.write_str("header"),
            ParameterLocation::Cookie => f.write_str("cookie"),
            ParameterLocation::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// Optional here so one nameless parameter fails its own operation, not the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Parameter {
    pub fn is_path(&self) -> bool {
        self.location == Some(ParameterLocation::Path)
    }

    pub fn input_kind(&self) -> InputKind {
        self.schema
            .as_ref()
            .map(Schema::input_kind)
            .unwrap_or(InputKind::Text)
    }
}
