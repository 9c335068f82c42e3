mod binder;

use std::fmt;
use std::sync::Arc;

use dynapi_core::types::{InputKind, ParameterLocation};
use url::Url;
use uuid::Uuid;

use crate::invoke::{Input, OperationInstance};

pub use binder::{bind_parameter, PropertyAccessor};

pub type Constructor = Arc<dyn Fn() -> OperationInstance + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiHint {
    SingleLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Any,
}

#[derive(Debug, Clone)]
pub struct InputDescriptor {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub kind: InputKind,
    pub ui_hint: UiHint,
    /// Hidden inputs are never listed to callers.
    pub browsable: bool,
    /// Stored in the instance's property map rather than a field of the primitive.
    pub synthetic: bool,
    pub required: bool,
    pub location: Option<ParameterLocation>,
    pub source: InputSource,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Synthetic(PropertyAccessor),
    Hidden(HiddenInput),
}

/// The primitive's own URL and method slots, wired by the descriptor's constructor.
#[derive(Debug, Clone)]
pub enum HiddenInput {
    Url(Input<Url>),
    Method(Input<String>),
}

impl HiddenInput {
    pub fn reference(&self) -> Uuid {
        match self {
            HiddenInput::Url(i) => i.reference(),
            HiddenInput::Method(i) => i.reference(),
        }
    }
}

impl InputDescriptor {
    pub fn accessor(&self) -> Option<&PropertyAccessor> {
        match &self.source {
            InputSource::Synthetic(a) => Some(a),
            InputSource::Hidden(_) => None,
        }
    }

    pub fn hidden(&self) -> Option<&HiddenInput> {
        match &self.source {
            InputSource::Hidden(h) => Some(h),
            InputSource::Synthetic(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OutputDescriptor {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub kind: OutputKind,
}

/// Metadata and constructor for one (path, method) pair.
#[derive(Clone)]
pub struct OperationDescriptor {
    pub kind: ActivityKind,
    pub category: String,
    pub description: Option<String>,
    /// Endpoint name, e.g. `GetUsersById`.
    pub name: String,
    pub fully_qualified_name: String,
    pub namespace: String,
    pub display_name: String,
    /// Uppercased HTTP verb.
    pub method: String,
    pub path_template: String,
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
    pub(crate) constructor: Constructor,
}

impl OperationDescriptor {
    /// Builds a fresh, independent instance. Safe to call any number of times.
    pub fn instantiate(&self) -> OperationInstance {
        (self.constructor)()
    }

    pub fn visible_inputs(&self) -> impl Iterator<Item = &InputDescriptor> {
        self.inputs.iter().filter(|i| i.browsable)
    }

    pub fn hidden_inputs(&self) -> impl Iterator<Item = &InputDescriptor> {
        self.inputs.iter().filter(|i| !i.browsable)
    }

    pub fn input(&self, name: &str) -> Option<&InputDescriptor> {
        self.inputs.iter().find(|i| i.name == name)
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            kind: self.kind,
            category: self.category.clone(),
            description: self.description.clone(),
            name: self.name.clone(),
            fully_qualified_name: self.fully_qualified_name.clone(),
            namespace: self.namespace.clone(),
            display_name: self.display_name.clone(),
            method: self.method.clone(),
            path: self.path_template.clone(),
            inputs: self
                .visible_inputs()
                .map(|i| InputSummary {
                    name: i.name.clone(),
                    display_name: i.display_name.clone(),
                    description: i.description.clone(),
                    kind: i.kind,
                    ui_hint: i.ui_hint,
                    required: i.required,
                    location: i.location.as_ref().map(|l| l.to_string()),
                })
                .collect(),
            outputs: self.outputs.clone(),
        }
    }
}

impl fmt::Debug for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("fully_qualified_name", &self.fully_qualified_name)
            .field("method", &self.method)
            .field("path_template", &self.path_template)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}

/// Caller-facing listing of a descriptor. Hidden inputs are never included.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DescriptorSummary {
    pub kind: ActivityKind,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    pub fully_qualified_name: String,
    pub namespace: String,
    pub display_name: String,
    pub method: String,
    pub path: String,
    pub inputs: Vec<InputSummary>,
    pub outputs: Vec<OutputDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InputSummary {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub kind: InputKind,
    pub ui_hint: UiHint,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
