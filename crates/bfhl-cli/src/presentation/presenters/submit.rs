use bfhl_engine::DisplayRepresentation;
use bfhl_runtime::FormSession;
use bfhl_types::ResponsePayload;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, RequestSummary, StatusBadge, SubmissionViewModel,
};

pub fn present_submission(
    endpoint: &str,
    session: &FormSession,
    response: &ResponsePayload,
    display: DisplayRepresentation,
) -> CommandResultViewModel<SubmissionViewModel> {
    let items = session
        .raw_input()
        .parse_data()
        .map(|data| data.len())
        .unwrap_or_default();
    let filters: Vec<String> = session
        .selection()
        .iter()
        .map(|field| field.key().to_string())
        .collect();

    let content = SubmissionViewModel {
        endpoint: endpoint.to_string(),
        request: RequestSummary {
            items,
            file_bytes: session.encoded_file().map(|file| file.decoded_len()),
        },
        filters,
        response: response.as_map().clone(),
        display,
    };

    let badge = match response.reported_failure() {
        Some(reason) => StatusBadge::warning(format!("Service reported failure: {}", reason)),
        None => StatusBadge::success(format!("Submitted to {}", endpoint)),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if result.content.filters.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Show only selected fields").with_command(cmd::SUBMIT_FILTERED),
        );
    } else if matches!(result.content.display, DisplayRepresentation::NoData { .. }) {
        result = result.with_suggestion(
            Guidance::new("Selected fields were empty; drop --filter to see the full response")
                .with_command(cmd::SUBMIT),
        );
    }

    result
}
