// NOTE: bfhl client layout
//
// One session struct (FormSession) owns every piece of form state; the
// one-shot `submit` command and the interactive `form` command both drive it.
// Nothing here keeps ambient global state: handlers receive the session,
// config and transport explicitly.
//
// Output goes through the presentation layer (presenter -> view model ->
// renderer) so `--format json` always yields the same data as plain text.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, FilterName, LogLevel, OutputFormat, SubmitArgs};
pub use commands::run;
