use super::args::hints::cmd;
use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use bfhl_runtime::{Config, ReqwestTransport, resolve_config_path};
use is_terminal::IsTerminal;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let renderer = ConsoleRenderer::new(cli.format.into());

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "resolved config path");

    match command {
        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = load_config(&config_path, cli.endpoint)?;
                handlers::config::show(&config_path, &config, &renderer)
            }
            ConfigCommand::Init { force } => {
                let config = Config::default().with_endpoint_override(cli.endpoint);
                handlers::config::init(&config_path, &config, force, &renderer)
            }
        },

        Commands::Submit(args) => {
            let config = load_config(&config_path, cli.endpoint)?;
            let transport = ReqwestTransport::from_config(&config)?;
            let runtime = build_runtime()?;
            runtime.block_on(handlers::submit::handle(&config, &transport, args, &renderer))
        }

        Commands::Form => {
            let config = load_config(&config_path, cli.endpoint)?;
            let transport = ReqwestTransport::from_config(&config)?;
            let runtime = build_runtime()?;
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            handlers::form::handle(
                &runtime,
                &config,
                &transport,
                stdin.lock(),
                interactive,
                &renderer,
            )
        }

        Commands::Status => {
            let config = load_config(&config_path, cli.endpoint)?;
            let transport = ReqwestTransport::from_config(&config)?;
            let runtime = build_runtime()?;
            runtime.block_on(handlers::status::handle(&config, &transport, &renderer))
        }
    }
}

fn load_config(path: &Path, endpoint: Option<String>) -> Result<Config> {
    let config = Config::load_from(path)?.with_endpoint_override(endpoint);
    config.endpoint_url()?;
    Ok(config)
}

// Commands run one request at a time; a current-thread runtime is enough.
fn build_runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn show_guidance() {
    println!("bfhl - client for the /bfhl data service\n");
    println!("Quick commands:");
    for (command, note) in [
        (cmd::SUBMIT, "Send once and print the response"),
        (cmd::FORM, "Interactive session"),
        (cmd::STATUS, "Probe the service"),
        (cmd::CONFIG_SHOW, "Effective settings"),
    ] {
        println!("  {:<44} # {}", command, note);
    }
    println!("\nFor more commands:");
    println!("  bfhl --help");
}
