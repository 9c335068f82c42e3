use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RegistryArgs {
    /// First segment of every fully-qualified operation name.
    #[arg(long, default_value = "Regres")]
    pub type_prefix: String,
    #[arg(long, default_value = "Api")]
    pub namespace: String,
    #[arg(long, default_value = "Demo")]
    pub category: String,
    /// Skip operations that cannot be built instead of failing the whole document.
    #[arg(long)]
    pub tolerant: bool,
}

#[derive(Debug, Args, Clone)]
pub struct HttpArgs {
    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 30000)]
    pub timeout: u64,
    #[arg(long, default_value_t = 4_194_304)]
    pub max_response_bytes: usize,
}
