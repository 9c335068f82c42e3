//! Descriptor synthesis: one [`OperationDescriptor`] per (path, method) pair of a document.

use std::collections::HashSet;
use std::sync::Arc;

use dynapi_core::types::{InputKind, Operation, SpecDocument};
use dynapi_core::{endpoint_name, humanize, is_http_method, sanitize_identifier};
use tracing::warn;
use url::Url;

use crate::config::{FailurePolicy, RegistryConfig};
use crate::descriptor::{
    bind_parameter, ActivityKind, HiddenInput, InputDescriptor, InputSource, OperationDescriptor,
    UiHint,
};
use crate::invoke::{parsed_content_output, Input, OperationInstance};
use crate::resolve::UrlTemplate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot build descriptor for {method} {path}: {kind}")]
pub struct DescriptorBuildError {
    pub path: String,
    pub method: String,
    pub kind: BuildErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildErrorKind {
    #[error("'{0}' is not an HTTP method")]
    UnsupportedMethod(String),
    #[error("parameter #{index} has no name")]
    UnnamedParameter { index: usize },
    #[error("api title '{title}' has no identifier characters")]
    EmptyApiName { title: String },
    #[error("fully-qualified name '{0}' is already taken by another operation")]
    DuplicateName(String),
}

/// Result of synthesizing every pair of a document.
#[derive(Debug, Default)]
pub struct Synthesis {
    pub descriptors: Vec<OperationDescriptor>,
    /// Pairs skipped under [`FailurePolicy::Tolerant`]. Always empty under fail-fast.
    pub skipped: Vec<DescriptorBuildError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RegistrationReport {
    pub registered: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl Synthesis {
    pub fn report(&self) -> RegistrationReport {
        RegistrationReport {
            registered: self.descriptors.len(),
            skipped: self.skipped.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Builds descriptors for every (path, method) pair, in document order.
///
/// Pairs share nothing but the read-only document. Under [`FailurePolicy::FailFast`] the first
/// failing pair aborts the whole pass; under [`FailurePolicy::Tolerant`] it is skipped.
pub fn synthesize(
    doc: &SpecDocument,
    config: &RegistryConfig,
) -> Result<Synthesis, DescriptorBuildError> {
    let mut out = Synthesis::default();
    let mut seen = HashSet::<String>::new();

    for (path, method, op) in doc.operations() {
        let built = build_descriptor(doc, config, path, method, op).and_then(|d| {
            if seen.insert(d.fully_qualified_name.clone()) {
                Ok(d)
            } else {
                Err(DescriptorBuildError {
                    path: path.to_string(),
                    method: method.to_string(),
                    kind: BuildErrorKind::DuplicateName(d.fully_qualified_name),
                })
            }
        });

        match built {
            Ok(d) => out.descriptors.push(d),
            Err(e) => match config.failure_policy {
                FailurePolicy::FailFast => return Err(e),
                FailurePolicy::Tolerant => {
                    warn!(path = %e.path, method = %e.method, error = %e.kind, "skipping operation");
                    out.skipped.push(e);
                }
            },
        }
    }

    Ok(out)
}

/// Builds the descriptor for a single pair.
pub fn build_descriptor(
    doc: &SpecDocument,
    config: &RegistryConfig,
    path: &str,
    method: &str,
    op: &Operation,
) -> Result<OperationDescriptor, DescriptorBuildError> {
    let fail = |kind| DescriptorBuildError {
        path: path.to_string(),
        method: method.to_string(),
        kind,
    };

    if !is_http_method(method) {
        return Err(fail(BuildErrorKind::UnsupportedMethod(method.to_string())));
    }

    let api_name = sanitize_identifier(&doc.info.title);
    if api_name.is_empty() {
        return Err(fail(BuildErrorKind::EmptyApiName {
            title: doc.info.title.clone(),
        }));
    }
    let name = endpoint_name(method, path);
    let fully_qualified_name = format!("{}.{api_name}.{name}", config.type_prefix);

    let mut inputs = Vec::with_capacity(op.parameters.len() + 2);
    for (index, param) in op.parameters.iter().enumerate() {
        let Some(param_name) = param.name.as_deref().filter(|n| !n.is_empty()) else {
            return Err(fail(BuildErrorKind::UnnamedParameter { index }));
        };
        inputs.push(bind_parameter(param_name, param));
    }

    let template = Arc::new(UrlTemplate::new(path, doc.base_server(), &inputs));
    let url_input: Input<Url> = Input::computed(move |instance| template.resolve(instance));
    let method_input = Input::fixed(method.to_ascii_uppercase());

    inputs.push(hidden_input(
        "Url",
        "The URL to send the request to.",
        InputKind::Uri,
        HiddenInput::Url(url_input.clone()),
    ));
    inputs.push(hidden_input(
        "Method",
        "The HTTP method to use when sending the request.",
        InputKind::Text,
        HiddenInput::Method(method_input.clone()),
    ));

    let type_name = fully_qualified_name.clone();
    let constructor = Arc::new(move || {
        let mut instance = OperationInstance::new(url_input.clone(), method_input.clone());
        instance.set_type_name(type_name.clone());
        instance
    });

    Ok(OperationDescriptor {
        kind: ActivityKind::Task,
        category: config.category.clone(),
        description: op.summary.clone().or_else(|| op.description.clone()),
        display_name: humanize(&name),
        fully_qualified_name,
        namespace: format!("{}.{api_name}", config.namespace),
        name,
        method: method.to_ascii_uppercase(),
        path_template: path.to_string(),
        inputs,
        outputs: vec![parsed_content_output()],
        constructor,
    })
}

fn hidden_input(
    name: &str,
    description: &str,
    kind: InputKind,
    hidden: HiddenInput,
) -> InputDescriptor {
    InputDescriptor {
        name: name.to_string(),
        display_name: name.to_string(),
        description: description.to_string(),
        kind,
        ui_hint: UiHint::SingleLine,
        browsable: false,
        synthetic: false,
        required: true,
        location: None,
        source: InputSource::Hidden(hidden),
    }
}
