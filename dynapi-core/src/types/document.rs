use indexmap::IndexMap;

use crate::types::{Components, Info, Operation};

/// Method name (as written in the document) to operation, in document order.
pub type PathItem = IndexMap<String, Operation>;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SpecDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Path template (`/users/{id}`) to its methods.
    pub paths: IndexMap<String, PathItem>,
}

impl SpecDocument {
    /// Base URL used for every operation: the first entry of `servers`.
    pub fn base_server(&self) -> Option<&str> {
        self.servers.first().map(|s| s.url.as_str())
    }

    /// Number of (path, method) pairs declared in the document.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|methods| methods.len()).sum()
    }

    /// Iterates every (path, method, operation) triple in document order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.paths.iter().flat_map(|(path, methods)| {
            methods
                .iter()
                .map(move |(method, op)| (path.as_str(), method.as_str(), op))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
