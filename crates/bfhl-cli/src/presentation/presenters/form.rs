use bfhl_runtime::FormSession;
use bfhl_types::FilterField;

use crate::presentation::view_models::{
    CommandResultViewModel, FilterOption, FormCommandHelp, FormReplyViewModel,
    FormStateViewModel,
};

pub fn present_form_reply(reply: FormReplyViewModel) -> CommandResultViewModel<FormReplyViewModel> {
    CommandResultViewModel::new(reply)
}

pub fn present_form_state(session: &FormSession) -> CommandResultViewModel<FormReplyViewModel> {
    let state = FormStateViewModel {
        input: session.raw_input().as_str().to_string(),
        file_bytes: session.encoded_file().map(|file| file.decoded_len()),
        filters: session
            .selection()
            .iter()
            .map(|field| field.key().to_string())
            .collect(),
        has_response: session.response().is_some(),
        filtered: session.filtered_view().is_some(),
        error: session.error_message().map(str::to_string),
        generations: session.issued_generations(),
    };

    present_form_reply(FormReplyViewModel::State(state))
}

pub fn present_form_help() -> CommandResultViewModel<FormReplyViewModel> {
    let commands = [
        ("input <json>", "Replace the JSON input"),
        ("file <path>", "Select a file to upload"),
        ("clear-file", "Remove the selected file"),
        ("filter <f1,f2>", "Select filters (empty clears)"),
        ("submit", "Send the input to the service"),
        ("apply", "Filter the last response and show it"),
        ("show", "Show the last response"),
        ("state", "Show the form state"),
        ("quit", "Leave the form"),
    ]
    .into_iter()
    .map(|(usage, description)| FormCommandHelp { usage, description })
    .collect();

    let filters = FilterField::ALL
        .iter()
        .map(|field| FilterOption {
            key: field.key(),
            label: field.label(),
        })
        .collect();

    present_form_reply(FormReplyViewModel::Help { commands, filters })
}
