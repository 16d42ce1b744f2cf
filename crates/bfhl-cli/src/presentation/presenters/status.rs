use crate::presentation::view_models::{CommandResultViewModel, StatusBadge, StatusViewModel};

pub fn present_status(endpoint: &str, operation_code: i64) -> CommandResultViewModel<StatusViewModel> {
    let content = StatusViewModel {
        endpoint: endpoint.to_string(),
        operation_code,
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::success("Service reachable"))
}
