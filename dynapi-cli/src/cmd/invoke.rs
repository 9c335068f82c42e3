use std::sync::Arc;

use dynapi_exec::{ExecutionContext, ReqwestHttpClient};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{HttpArgs, OutputArgs, RegistryArgs};

use super::config::{bind_set_inputs, build_http_config, build_registry_config, register};

#[derive(Serialize)]
struct InvokeResult {
    operation: String,
    status: u16,
    content: serde_json::Value,
}

pub async fn invoke_cmd(
    spec: &str,
    operation: &str,
    set_inputs: &[String],
    output: OutputArgs,
    registry: RegistryArgs,
    http: HttpArgs,
) -> i32 {
    let config = build_registry_config(&registry);
    let http_config = build_http_config(&http);
    let (provider, _) = match register(spec, config, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    let Some(descriptor) = provider.registry().find(operation) else {
        print_error(
            output.format,
            output.quiet,
            &format!("unknown or ambiguous operation '{operation}'"),
        );
        return exit_codes::VALIDATION_FAILED;
    };

    let mut instance = descriptor.instantiate();
    if let Err(message) = bind_set_inputs(&descriptor, &mut instance, set_inputs) {
        print_error(output.format, output.quiet, &message);
        return exit_codes::VALIDATION_FAILED;
    }

    let client = match ReqwestHttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let cancel = CancellationToken::new();
    let ctx = ExecutionContext::new(Arc::new(client), http_config).with_cancel(cancel.clone());
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted; cancelling request");
            cancel.cancel();
        }
    });

    let result = instance.execute(&ctx).await;
    interrupt.abort();

    match result {
        Ok(out) => {
            if output.format == OutputFormat::Text && !output.quiet {
                print_result(output.format, false, &out.parsed_content);
            } else {
                let result = InvokeResult {
                    operation: descriptor.fully_qualified_name.clone(),
                    status: out.status,
                    content: out.parsed_content,
                };
                print_result(output.format, output.quiet, &result);
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::RUN_FAILED
        }
    }
}
