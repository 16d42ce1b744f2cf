use anyhow::{Result, bail};
use bfhl_runtime::Config;
use std::path::Path;
use tracing::info;

use crate::args::hints::cmd;
use crate::presentation::Renderer;
use crate::presentation::presenters;

pub fn show(path: &Path, config: &Config, renderer: &impl Renderer) -> Result<()> {
    renderer.render(presenters::present_config(path, path.exists(), config))
}

pub fn init(path: &Path, config: &Config, force: bool, renderer: &impl Renderer) -> Result<()> {
    let existed = path.exists();
    if existed && !force {
        bail!(
            "Config file already exists at {} (use '{}' to overwrite)",
            path.display(),
            cmd::CONFIG_INIT_FORCE
        );
    }

    config.endpoint_url()?;
    config.save_to(path)?;
    info!(path = %path.display(), "config written");

    renderer.render(presenters::present_config_init(path, existed, config))
}
