use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the operations synthesized from a spec document.
    Describe {
        /// File path or http(s) URL of the spec document.
        spec: String,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        registry: RegistryArgs,
    },
    /// Invoke one operation against the document's server.
    Invoke {
        spec: String,
        /// Fully-qualified name or endpoint name, e.g. `GetUsersById`.
        operation: String,
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set_inputs: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        registry: RegistryArgs,
        #[command(flatten)]
        http: HttpArgs,
    },
    /// Report operations that cannot be built, without failing on the first one.
    Check {
        spec: String,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        registry: RegistryArgs,
    },
}
