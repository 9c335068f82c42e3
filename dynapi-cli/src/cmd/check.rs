use dynapi_exec::FailurePolicy;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, RegistryArgs};

use super::config::{build_registry_config, register};

#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    registered: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
}

pub async fn check_cmd(spec: &str, output: OutputArgs, registry: RegistryArgs) -> i32 {
    let mut config = build_registry_config(&registry);
    config.failure_policy = FailurePolicy::Tolerant;

    let (_, report) = match register(spec, config, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    let result = CheckResult {
        valid: report.skipped.is_empty(),
        registered: report.registered,
        skipped: report.skipped,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        if result.valid {
            println!("ok: {} operations", result.registered);
        } else {
            eprintln!(
                "error: {} operations could not be built ({} ok)",
                result.skipped.len(),
                result.registered
            );
            for s in &result.skipped {
                eprintln!("- {s}");
            }
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    if result.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    }
}
