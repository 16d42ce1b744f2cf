// NOTE: Command layout
//
// `submit` is the scripted path: one request, one rendered result.
// `form` keeps a session alive on stdin so input, file and filters can be
// changed between submissions without losing the last response.

mod commands;
mod enums;
pub mod hints;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bfhl")]
#[command(about = "Submit JSON data to a /bfhl service and filter the response", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $BFHL_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Service endpoint, overriding $BFHL_ENDPOINT and the config file
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log verbosity on stderr (default: $RUST_LOG, then warn)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
