use bfhl_runtime::Config;
use std::path::Path;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

fn filter_keys(config: &Config) -> Vec<String> {
    config
        .default_filters
        .iter()
        .map(|field| field.key().to_string())
        .collect()
}

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.to_path_buf(),
        exists,
        endpoint: config.endpoint.clone(),
        timeout_secs: config.timeout_secs,
        default_filters: filter_keys(config),
    };

    let mut result = CommandResultViewModel::new(content);

    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file; using defaults"))
            .with_suggestion(Guidance::new("Create one").with_command(cmd::CONFIG_INIT));
    }

    result
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.to_path_buf(),
        overwritten,
        endpoint: config.endpoint.clone(),
    };

    let label = if overwritten {
        "Config file overwritten"
    } else {
        "Config file created"
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Check the service").with_command(cmd::STATUS))
}
