use std::time::Duration;

/// Naming and failure handling for a registration pass.
///
/// The defaults name operations `Regres.{api}.{endpoint}` in namespace `Api.{api}`.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// First segment of every fully-qualified name (`{type_prefix}.{api}.{endpoint}`).
    pub type_prefix: String,
    /// First segment of each descriptor's namespace (`{namespace}.{api}`).
    pub namespace: String,
    pub category: String,
    pub failure_policy: FailurePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            type_prefix: "Regres".to_string(),
            namespace: "Api".to_string(),
            category: "Demo".to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// What a registration pass does when one (path, method) pair cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the pass; the registry keeps its previous contents.
    #[default]
    FailFast,
    /// Skip the pair, log it, and register everything else.
    Tolerant,
}

/// Limits applied to each request sent by [`crate::ExecutionContext`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub max_response_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(30_000),
            max_response_bytes: 4_194_304,
        }
    }
}
