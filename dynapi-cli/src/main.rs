use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "dynapi", version, about = "Invoke HTTP operations described by a spec document")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Describe {
            spec,
            output,
            registry,
        } => cmd::describe::describe_cmd(&spec, output, registry).await,
        Command::Invoke {
            spec,
            operation,
            set_inputs,
            output,
            registry,
            http,
        } => cmd::invoke::invoke_cmd(&spec, &operation, &set_inputs, output, registry, http).await,
        Command::Check {
            spec,
            output,
            registry,
        } => cmd::check::check_cmd(&spec, output, registry).await,
    }
}
