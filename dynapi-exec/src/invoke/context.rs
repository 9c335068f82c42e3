use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::HttpConfig;
use crate::invoke::HttpClient;

/// Per-invocation context supplied by the host engine.
#[derive(Clone)]
pub struct ExecutionContext {
    pub http: Arc<dyn HttpClient>,
    pub cancel: CancellationToken,
    pub config: HttpConfig,
}

impl ExecutionContext {
    pub fn new(http: Arc<dyn HttpClient>, config: HttpConfig) -> Self {
        Self {
            http,
            cancel: CancellationToken::new(),
            config,
        }
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
