use bfhl_types::FilterSelection;
use clap::{Args, Subcommand};

use super::enums::FilterName;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Submit JSON data (and an optional file) once and render the response")]
    Submit(SubmitArgs),

    #[command(
        about = "Interactive form session on stdin",
        long_about = "Interactive form session on stdin.\n\n\
                      Commands: input <json>, file <path>, clear-file, filter <f1,f2>,\n\
                      submit, apply, show, state, help, quit"
    )]
    Form,

    #[command(about = "Probe the service endpoint")]
    Status,

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// JSON text, e.g. '{"data": ["A", "1"]}'
    #[arg(long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the JSON text from a file instead (stdin when neither is given)
    #[arg(long)]
    pub input_file: Option<String>,

    /// File sent base64-encoded as `file_b64`
    #[arg(long)]
    pub file: Option<String>,

    /// Fields to display, comma separated (default: config `default_filters`)
    #[arg(long, value_delimiter = ',')]
    pub filter: Vec<FilterName>,
}

impl SubmitArgs {
    /// Selection from `--filter`, or `None` when the flag was not given.
    pub fn selection(&self) -> Option<FilterSelection> {
        if self.filter.is_empty() {
            return None;
        }
        Some(self.filter.iter().map(|name| (*name).into()).collect())
    }
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a default config file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
