use std::time::Duration;

use dynapi_core::types::InputKind;
use dynapi_exec::{
    FailurePolicy, HttpConfig, OperationDescriptor, OperationInstance, Provider, ProviderError,
    RegistrationReport, RegistryConfig,
};
use serde_json::Value as JsonValue;

use crate::exit_codes;
use crate::output::print_error;
use crate::{HttpArgs, OutputArgs, RegistryArgs};

pub fn build_registry_config(registry: &RegistryArgs) -> RegistryConfig {
    RegistryConfig {
        type_prefix: registry.type_prefix.clone(),
        namespace: registry.namespace.clone(),
        category: registry.category.clone(),
        failure_policy: if registry.tolerant {
            FailurePolicy::Tolerant
        } else {
            FailurePolicy::FailFast
        },
    }
}

pub fn build_http_config(http: &HttpArgs) -> HttpConfig {
    HttpConfig {
        timeout: Duration::from_millis(http.timeout),
        max_response_bytes: http.max_response_bytes,
    }
}

/// Runs one registration pass, printing the failure and returning the exit code on error.
pub async fn register(
    spec: &str,
    config: RegistryConfig,
    output: &OutputArgs,
) -> Result<(Provider, RegistrationReport), i32> {
    let provider = Provider::new(config);
    match provider.register(spec).await {
        Ok(report) => Ok((provider, report)),
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            Err(match e {
                ProviderError::Load { .. } => exit_codes::RUNTIME_ERROR,
                ProviderError::Malformed(_) | ProviderError::Build(_) => {
                    exit_codes::VALIDATION_FAILED
                }
            })
        }
    }
}

/// Binds `NAME=VALUE` pairs onto the instance's visible inputs.
///
/// Numeric inputs take integers; everything else is bound as a string.
pub fn bind_set_inputs(
    descriptor: &OperationDescriptor,
    instance: &mut OperationInstance,
    set_inputs: &[String],
) -> Result<(), String> {
    for s in set_inputs {
        let Some((name, raw)) = s.split_once('=') else {
            return Err(format!("expected NAME=VALUE, got '{s}'"));
        };
        let Some((input, accessor)) = descriptor
            .visible_inputs()
            .find(|i| i.name == name)
            .and_then(|i| i.accessor().map(|a| (i, a)))
        else {
            return Err(format!(
                "operation '{}' has no input named '{name}'",
                descriptor.name
            ));
        };
        let value = match input.kind {
            InputKind::Number => raw
                .parse::<i64>()
                .map(JsonValue::from)
                .map_err(|_| format!("input '{name}' expects an integer, got '{raw}'"))?,
            InputKind::Text | InputKind::Uri => JsonValue::String(raw.to_string()),
        };
        accessor.set(instance, value);
    }
    Ok(())
}
