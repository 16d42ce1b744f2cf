use anyhow::Result;
use bfhl_runtime::{Config, Transport};
use bfhl_types::SubmissionError;
use tracing::warn;

use super::user_facing;
use crate::presentation::Renderer;
use crate::presentation::presenters;

pub async fn handle(
    config: &Config,
    transport: &dyn Transport,
    renderer: &impl Renderer,
) -> Result<()> {
    let operation_code = match transport.probe().await {
        Ok(code) => code,
        Err(failure) => {
            warn!(%failure, endpoint = %config.endpoint, "status probe failed");
            return Err(user_facing(SubmissionError::RequestFailed(failure)));
        }
    };

    renderer.render(presenters::present_status(&config.endpoint, operation_code))
}
