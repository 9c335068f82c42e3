use std::collections::BTreeMap;

use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::invoke::{
    parse_body, ExecutionContext, HttpRequestParts, Input, InvocationError,
};

/// Type identity of an instance that has not been given a synthesized name.
pub const SEND_HTTP_REQUEST_TYPE: &str = "Dynapi.SendHttpRequest";

/// Maximum number of body bytes kept in [`InvocationError::Status`].
const ERROR_BODY_PREVIEW: usize = 1024;

/// One runtime instance of the generic HTTP primitive.
///
/// Every synthesized operation shares this shape; they differ only in `type_name`, the
/// synthetic properties bound by the caller, and the URL/method inputs wired in by the
/// descriptor's constructor.
#[derive(Debug, Clone)]
pub struct OperationInstance {
    id: Uuid,
    type_name: String,
    properties: BTreeMap<String, JsonValue>,
    url: Input<Url>,
    method: Input<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutput {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub parsed_content: JsonValue,
}

impl OperationInstance {
    pub fn new(url: Input<Url>, method: Input<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            type_name: SEND_HTTP_REQUEST_TYPE.to_string(),
            properties: BTreeMap::new(),
            url,
            method,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
    }

    pub fn url_input(&self) -> &Input<Url> {
        &self.url
    }

    pub fn method_input(&self) -> &Input<String> {
        &self.method
    }

    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: JsonValue) {
        self.properties.insert(key.into(), value);
    }

    /// Resolves the request from the currently bound properties without sending it.
    pub fn prepare_request(&self) -> Result<HttpRequestParts, InvocationError> {
        let method = self.method.evaluate(self)?.to_ascii_uppercase();
        let url = self.url.evaluate(self)?;
        Ok(HttpRequestParts {
            method,
            url,
            headers: BTreeMap::new(),
            body: Vec::new(),
        })
    }

    pub async fn execute(&self, ctx: &ExecutionContext) -> Result<InvocationOutput, InvocationError> {
        let req = self.prepare_request()?;
        debug!(
            instance = %self.id,
            operation = %self.type_name,
            method = %req.method,
            url = %req.url,
            "sending request"
        );

        let resp = tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => return Err(InvocationError::Cancelled),
            r = ctx.http.send(req, ctx.config.timeout, ctx.config.max_response_bytes) => r?,
        };

        debug!(instance = %self.id, status = resp.status, "received response");

        if !resp.is_success() {
            let end = resp.body.len().min(ERROR_BODY_PREVIEW);
            return Err(InvocationError::Status {
                status: resp.status,
                body: String::from_utf8_lossy(&resp.body[..end]).into_owned(),
            });
        }

        let parsed_content = parse_body(&resp);
        Ok(InvocationOutput {
            status: resp.status,
            headers: resp.headers,
            parsed_content,
        })
    }
}
