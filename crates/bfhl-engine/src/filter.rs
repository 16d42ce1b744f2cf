use bfhl_types::{FilterSelection, FilteredView, ResponsePayload};

/// Restrict `response` to the fields in `selection`.
///
/// Returns `None` for an empty selection, meaning "show everything".
/// Selected fields the response does not contain are left out of the view.
pub fn apply_filters(
    response: &ResponsePayload,
    selection: &FilterSelection,
) -> Option<FilteredView> {
    if selection.is_empty() {
        return None;
    }

    let mut view = FilteredView::new();
    for field in selection.iter() {
        if response.contains_key(field.key()) {
            view.insert(field, response.get(field.key()));
        }
    }

    Some(view)
}
