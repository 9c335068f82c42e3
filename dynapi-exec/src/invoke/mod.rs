//! The generic "send one HTTP request" primitive every synthesized operation delegates to.

mod body;
mod context;
pub mod http;
mod input;
mod instance;

pub use body::parse_body;
pub use context::ExecutionContext;
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
pub use input::{Input, InputValue};
pub use instance::{InvocationOutput, OperationInstance, SEND_HTTP_REQUEST_TYPE};

use crate::descriptor::{OutputDescriptor, OutputKind};
use crate::resolve::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("url resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("remote returned HTTP {status}")]
    Status { status: u16, body: String },
    #[error("invocation cancelled")]
    Cancelled,
}

/// Output shape of the primitive: the parsed response body.
pub fn parsed_content_output() -> OutputDescriptor {
    OutputDescriptor {
        name: "ParsedContent".to_string(),
        display_name: "Parsed content".to_string(),
        description: "The parsed content, if any.".to_string(),
        kind: OutputKind::Any,
    }
}
