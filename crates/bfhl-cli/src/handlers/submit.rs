use anyhow::{Context, Result};
use bfhl_runtime::{Config, FormSession, Transport};
use std::path::Path;
use tracing::debug;

use super::user_facing;
use crate::args::SubmitArgs;
use crate::presentation::Renderer;
use crate::presentation::presenters;

pub async fn handle(
    config: &Config,
    transport: &dyn Transport,
    args: SubmitArgs,
    renderer: &impl Renderer,
) -> Result<()> {
    let raw = read_input(&args).await?;
    let selection = args
        .selection()
        .unwrap_or_else(|| config.default_filters.clone());

    let mut session = FormSession::with_selection(selection);
    session.set_raw_input(raw);

    if let Some(path) = &args.file
        && let Err(err) = session.set_file(Path::new(path)).await
    {
        let message = err.user_message();
        return Err(anyhow::Error::new(err).context(message));
    }

    session.submit(transport).await.map_err(user_facing)?;
    session.apply_filters();

    let response = session
        .response()
        .context("submission completed without a response")?;
    let display = session
        .render()
        .context("submission completed without a response")?;

    renderer.render(presenters::present_submission(
        &config.endpoint,
        &session,
        response,
        display,
    ))
}

/// `--input`, then `--input-file`, then all of stdin.
async fn read_input(args: &SubmitArgs) -> Result<String> {
    if let Some(text) = &args.input {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input_file {
        debug!(path = %path, "reading input file");
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path));
    }

    debug!("reading input from stdin");
    Ok(std::io::read_to_string(std::io::stdin())?)
}
