//! Path-template resolution against the bound values of one instance.

use std::sync::LazyLock;

use dynapi_core::types::ParameterLocation;
use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::warn;
use url::Url;

use crate::descriptor::{InputDescriptor, PropertyAccessor};
use crate::invoke::OperationInstance;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}/]*\}").expect("valid regex"));

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("no server configured: the document's `servers` list is empty")]
    NoServerConfigured,
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cannot resolve path '{path}' against '{base}': {source}")]
    InvalidUrl {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
struct BoundParameter {
    name: String,
    accessor: PropertyAccessor,
}

/// A path template bound to an operation's parameters and base server.
///
/// Built once per descriptor; [`UrlTemplate::resolve`] runs on every invocation.
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    template: String,
    base_server: Option<String>,
    path_params: Vec<BoundParameter>,
    query_params: Vec<BoundParameter>,
}

impl UrlTemplate {
    /// `inputs` are the bound parameter inputs of the operation; path and query inputs are
    /// picked out, everything else is ignored.
    pub fn new(template: &str, base_server: Option<&str>, inputs: &[InputDescriptor]) -> Self {
        let mut path_params = Vec::new();
        let mut query_params = Vec::new();
        for input in inputs {
            let Some(accessor) = input.accessor() else {
                continue;
            };
            let bound = BoundParameter {
                name: input.name.clone(),
                accessor: accessor.clone(),
            };
            match input.location {
                Some(ParameterLocation::Path) => path_params.push(bound),
                Some(ParameterLocation::Query) => query_params.push(bound),
                _ => {}
            }
        }
        Self {
            template: template.to_string(),
            base_server: base_server.map(str::to_string),
            path_params,
            query_params,
        }
    }

    /// Substitutes bound values into the template and joins it onto the base server.
    ///
    /// Unbound path parameters substitute as empty strings. Placeholders with no matching
    /// path parameter are left in place (the `url` crate percent-encodes their braces).
    pub fn resolve(&self, instance: &OperationInstance) -> Result<Url, ResolveError> {
        let base = self
            .base_server
            .as_deref()
            .ok_or(ResolveError::NoServerConfigured)?;

        let mut path = self.template.clone();
        for p in &self.path_params {
            let value = p.accessor.get(instance).map(value_to_string).unwrap_or_default();
            path = path.replace(&format!("{{{}}}", p.name), &urlencoding::encode(&value));
        }

        let leftover: Vec<&str> = PLACEHOLDER_RE.find_iter(&path).map(|m| m.as_str()).collect();
        if !leftover.is_empty() {
            warn!(
                template = %self.template,
                placeholders = ?leftover,
                "path placeholders have no matching path parameter; passing them through"
            );
        }

        let base_url = Url::parse(base).map_err(|source| ResolveError::InvalidServerUrl {
            url: base.to_string(),
            source,
        })?;
        let mut url = base_url
            .join(&path)
            .map_err(|source| ResolveError::InvalidUrl {
                base: base.to_string(),
                path: path.clone(),
                source,
            })?;

        let query: Vec<(&str, String)> = self
            .query_params
            .iter()
            .filter_map(|p| match p.accessor.get(instance) {
                None | Some(JsonValue::Null) => None,
                Some(v) => Some((p.name.as_str(), value_to_string(v))),
            })
            .collect();
        if !query.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &query {
                qp.append_pair(k, v);
            }
        }

        Ok(url)
    }
}

fn value_to_string(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
