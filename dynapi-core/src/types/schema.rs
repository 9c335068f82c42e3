use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

/// The `type` keyword as written: one tag, a list of tags (`[integer, "null"]`), or
/// something unrecognised, which is kept rather than rejecting the document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
    Other(serde_json::Value),
}

impl SchemaType {
    /// The one non-`null` tag, if there is exactly one.
    pub fn primary(&self) -> Option<&str> {
        match self {
            SchemaType::Single(t) => Some(t.as_str()),
            SchemaType::Union(tags) => {
                let mut non_null = tags.iter().filter(|t| t.as_str() != "null");
                match (non_null.next(), non_null.next()) {
                    (Some(t), None) => Some(t.as_str()),
                    _ => None,
                }
            }
            SchemaType::Other(_) => None,
        }
    }
}

impl Schema {
    /// `integer` (alone or alongside `null`) is the only type that yields a numeric input;
    /// anything else is text.
    pub fn input_kind(&self) -> InputKind {
        match self.schema_type.as_ref().and_then(SchemaType::primary) {
            Some("integer") => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

/// Semantic type of a descriptor input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Number,
    Text,
    Uri,
}
