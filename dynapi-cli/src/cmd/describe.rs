use dynapi_exec::DescriptorSummary;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, RegistryArgs};

use super::config::{build_registry_config, register};

#[derive(Serialize)]
struct DescribeResult {
    operations: Vec<DescriptorSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
}

pub async fn describe_cmd(spec: &str, output: OutputArgs, registry: RegistryArgs) -> i32 {
    let config = build_registry_config(&registry);
    let (provider, report) = match register(spec, config, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    let result = DescribeResult {
        operations: provider
            .registry()
            .snapshot()
            .iter()
            .map(|d| d.summary())
            .collect(),
        skipped: report.skipped,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        for op in &result.operations {
            println!("{}  {} {}", op.fully_qualified_name, op.method, op.path);
            println!("    {}", op.display_name);
            for input in &op.inputs {
                let location = input.location.as_deref().unwrap_or("-");
                let required = if input.required { ", required" } else { "" };
                println!(
                    "    - {} ({:?}, {location}{required}): {}",
                    input.name, input.kind, input.description
                );
            }
        }
        for s in &result.skipped {
            eprintln!("skipped: {s}");
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}
