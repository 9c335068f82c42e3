#![forbid(unsafe_code)]

//! Turns a spec document into a registry of invocable HTTP operations.
//!
//! Document parsing and naming live in `dynapi-core`; this crate binds parameters, synthesizes
//! descriptors, holds the registry, and executes instances against the remote API.

pub mod config;
pub mod descriptor;
pub mod invoke;
pub mod provider;
pub mod registry;
pub mod resolve;
pub mod synth;

pub use crate::config::{FailurePolicy, HttpConfig, RegistryConfig};
pub use crate::descriptor::{
    DescriptorSummary, InputDescriptor, InputSource, OperationDescriptor, OutputDescriptor,
};
pub use crate::invoke::{
    ExecutionContext, HttpClient, HttpError, InvocationError, InvocationOutput,
    OperationInstance, ReqwestHttpClient,
};
pub use crate::provider::{Provider, ProviderError};
pub use crate::registry::Registry;
pub use crate::resolve::{ResolveError, UrlTemplate};
pub use crate::synth::{synthesize, DescriptorBuildError, RegistrationReport, Synthesis};
