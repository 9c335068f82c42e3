use dynapi_core::humanize;
use dynapi_core::types::Parameter;
use serde_json::Value as JsonValue;

use crate::descriptor::{InputDescriptor, InputSource, UiHint};
use crate::invoke::OperationInstance;

/// Reads and writes one key of an instance's synthetic property store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccessor {
    key: String,
}

impl PropertyAccessor {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn get<'a>(&self, instance: &'a OperationInstance) -> Option<&'a JsonValue> {
        instance.property(&self.key)
    }

    pub fn set(&self, instance: &mut OperationInstance, value: JsonValue) {
        instance.set_property(self.key.clone(), value);
    }
}

/// Turns one declared parameter into a browsable, synthetic input keyed by `name`.
pub fn bind_parameter(name: &str, param: &Parameter) -> InputDescriptor {
    InputDescriptor {
        name: name.to_string(),
        display_name: humanize(name),
        description: param
            .description
            .clone()
            .unwrap_or_else(|| name.to_string()),
        kind: param.input_kind(),
        ui_hint: UiHint::SingleLine,
        browsable: true,
        synthetic: true,
        required: param.required || param.is_path(),
        location: param.location.clone(),
        source: InputSource::Synthetic(PropertyAccessor::new(name)),
    }
}
