use bfhl_engine::DisplayRepresentation;
use bfhl_types::{
    CollectorError, EncodedFile, FilterSelection, FilteredView, RawInput, RequestFailure,
    RequestPayload, ResponsePayload, SubmissionError, SubmissionResult,
};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::client::prepare_request;
use crate::collector::read_encoded_file;
use crate::transport::Transport;

/// A submission that passed validation and is waiting for the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    generation: u64,
    request: RequestPayload,
}

impl PendingSubmission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &RequestPayload {
        &self.request
    }
}

/// What happened when a pending submission was completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Response stored; filtered view and error slot cleared
    Applied,

    /// Request failed; previous response kept, error slot set
    Failed(SubmissionError),

    /// A newer submission was issued; result discarded
    Stale { generation: u64, latest: u64 },
}

/// All state of one form: input, file, last response, filters and the
/// shared error slot.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    raw_input: RawInput,
    encoded_file: Option<EncodedFile>,
    response: Option<ResponsePayload>,
    selection: FilterSelection,
    filtered: Option<FilteredView>,
    error: Option<String>,
    issued: u64,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: FilterSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    // Input collection

    pub fn set_raw_input(&mut self, text: impl Into<String>) {
        self.raw_input = RawInput::new(text);
    }

    /// Read and encode a file. On failure the previous file stays selected
    /// and the error slot is set.
    pub async fn set_file(&mut self, path: &Path) -> Result<(), CollectorError> {
        match read_encoded_file(path).await {
            Ok(encoded) => {
                self.encoded_file = Some(encoded);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "file read failed");
                self.error = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    pub fn set_encoded_file(&mut self, encoded: EncodedFile) {
        self.encoded_file = Some(encoded);
    }

    pub fn clear_file(&mut self) {
        self.encoded_file = None;
    }

    // Submission

    /// Validate the current input and issue a new generation.
    ///
    /// Invalid input is reported synchronously and leaves the generation
    /// counter untouched.
    pub fn begin_submission(&mut self) -> SubmissionResult<PendingSubmission> {
        let request = match prepare_request(&self.raw_input, self.encoded_file.as_ref()) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "input rejected");
                self.error = Some(err.user_message().to_string());
                return Err(err);
            }
        };

        self.issued += 1;
        debug!(generation = self.issued, "submission issued");
        Ok(PendingSubmission {
            generation: self.issued,
            request,
        })
    }

    /// Apply the transport result of a pending submission.
    ///
    /// Only the most recently issued generation may change state.
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<ResponsePayload, RequestFailure>,
    ) -> SubmissionOutcome {
        if pending.generation != self.issued {
            info!(
                generation = pending.generation,
                latest = self.issued,
                "discarding stale submission result"
            );
            return SubmissionOutcome::Stale {
                generation: pending.generation,
                latest: self.issued,
            };
        }

        match result {
            Ok(response) => {
                info!(fields = response.len(), "submission succeeded");
                self.response = Some(response);
                self.filtered = None;
                self.error = None;
                SubmissionOutcome::Applied
            }
            Err(failure) => {
                warn!(%failure, "submission failed");
                let err = SubmissionError::RequestFailed(failure);
                self.error = Some(err.user_message().to_string());
                SubmissionOutcome::Failed(err)
            }
        }
    }

    /// Validate, send and apply in one step.
    pub async fn submit(&mut self, transport: &dyn Transport) -> SubmissionResult<()> {
        let pending = self.begin_submission()?;
        let result = transport.send(pending.request()).await;

        match self.complete_submission(pending, result) {
            SubmissionOutcome::Applied | SubmissionOutcome::Stale { .. } => Ok(()),
            SubmissionOutcome::Failed(err) => Err(err),
        }
    }

    // Filtering and display

    /// Replace the selection. The filtered view is not recomputed until
    /// [`FormSession::apply_filters`] is called.
    pub fn set_filter_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Recompute the filtered view from the stored response.
    ///
    /// Does nothing and returns `None` when there is no response yet.
    pub fn apply_filters(&mut self) -> Option<&FilteredView> {
        let Some(response) = &self.response else {
            debug!("apply_filters called without a response");
            return None;
        };

        self.filtered = bfhl_engine::apply_filters(response, &self.selection);
        self.filtered.as_ref()
    }

    pub fn render(&self) -> Option<DisplayRepresentation> {
        self.response
            .as_ref()
            .map(|response| bfhl_engine::render(response, self.filtered.as_ref()))
    }

    // Accessors

    pub fn raw_input(&self) -> &RawInput {
        &self.raw_input
    }

    pub fn encoded_file(&self) -> Option<&EncodedFile> {
        self.encoded_file.as_ref()
    }

    pub fn response(&self) -> Option<&ResponsePayload> {
        self.response.as_ref()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered_view(&self) -> Option<&FilteredView> {
        self.filtered.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn issued_generations(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_types::FilterField;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ResponsePayload {
        ResponsePayload::from_value(value).unwrap()
    }

    fn ready_session() -> FormSession {
        let mut session = FormSession::new();
        session.set_raw_input(r#"{"data": ["A", "B", "1"]}"#);
        session
    }

    #[test]
    fn invalid_input_sets_error_without_issuing() {
        let mut session = FormSession::new();
        session.set_raw_input("not valid json");

        let err = session.begin_submission().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(session.issued_generations(), 0);
        assert_eq!(session.error_message(), Some("Invalid JSON input."));
    }

    #[test]
    fn success_stores_response_and_clears_view_and_error() {
        let mut session = ready_session();
        session.set_filter_selection([FilterField::Alphabets].into_iter().collect());

        let first = session.begin_submission().unwrap();
        session.complete_submission(first, Ok(response(json!({"alphabets": ["A"]}))));
        assert!(session.apply_filters().is_some());

        let failed = session.begin_submission().unwrap();
        session.complete_submission(failed, Err(RequestFailure::Status(500)));
        assert_eq!(session.error_message(), Some("Request failed."));

        let second = session.begin_submission().unwrap();
        let outcome =
            session.complete_submission(second, Ok(response(json!({"alphabets": ["B"]}))));

        assert_eq!(outcome, SubmissionOutcome::Applied);
        assert!(session.filtered_view().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn failure_keeps_previous_response() {
        let mut session = ready_session();
        let first = session.begin_submission().unwrap();
        session.complete_submission(first, Ok(response(json!({"numbers": ["1"]}))));

        let second = session.begin_submission().unwrap();
        let outcome = session.complete_submission(
            second,
            Err(RequestFailure::Network("connection refused".into())),
        );

        assert!(matches!(
            outcome,
            SubmissionOutcome::Failed(SubmissionError::RequestFailed(_))
        ));
        assert_eq!(
            session.response(),
            Some(&response(json!({"numbers": ["1"]})))
        );
    }

    #[test]
    fn older_generation_is_discarded() {
        let mut session = ready_session();
        let first = session.begin_submission().unwrap();
        let second = session.begin_submission().unwrap();

        let applied = session.complete_submission(second, Ok(response(json!({"alphabets": ["new"]}))));
        assert_eq!(applied, SubmissionOutcome::Applied);

        let stale = session.complete_submission(first, Ok(response(json!({"alphabets": ["old"]}))));
        assert_eq!(
            stale,
            SubmissionOutcome::Stale {
                generation: 1,
                latest: 2
            }
        );
        assert_eq!(
            session.response(),
            Some(&response(json!({"alphabets": ["new"]})))
        );
    }

    #[test]
    fn stale_failure_does_not_touch_error_slot() {
        let mut session = ready_session();
        let first = session.begin_submission().unwrap();
        let _second = session.begin_submission().unwrap();

        session.complete_submission(first, Err(RequestFailure::Status(502)));
        assert!(session.error_message().is_none());
    }

    #[test]
    fn selection_change_does_not_recompute_view() {
        let mut session = ready_session();
        let pending = session.begin_submission().unwrap();
        session.complete_submission(
            pending,
            Ok(response(json!({"alphabets": ["A"], "numbers": ["1"]}))),
        );

        session.set_filter_selection([FilterField::Alphabets].into_iter().collect());
        session.apply_filters();
        session.set_filter_selection([FilterField::Numbers].into_iter().collect());

        let view = session.filtered_view().unwrap();
        assert_eq!(view.fields().collect::<Vec<_>>(), vec![FilterField::Alphabets]);
    }

    #[test]
    fn apply_and_render_without_response_are_noops() {
        let mut session = FormSession::with_selection(FilterSelection::all());
        assert!(session.apply_filters().is_none());
        assert!(session.render().is_none());
    }

    #[test]
    fn empty_selection_clears_view() {
        let mut session = ready_session();
        let pending = session.begin_submission().unwrap();
        session.complete_submission(pending, Ok(response(json!({"alphabets": ["A"]}))));

        session.set_filter_selection(FilterSelection::all());
        assert!(session.apply_filters().is_some());

        session.set_filter_selection(FilterSelection::new());
        assert!(session.apply_filters().is_none());
        assert!(matches!(
            session.render(),
            Some(DisplayRepresentation::Full { .. })
        ));
    }

    #[tokio::test]
    async fn unreadable_file_keeps_previous_file() {
        let mut session = FormSession::new();
        session.set_encoded_file(EncodedFile::from_bytes(b"keep"));

        let dir = tempfile::TempDir::new().unwrap();
        let result = session.set_file(&dir.path().join("missing.png")).await;

        assert!(result.is_err());
        assert_eq!(
            session.encoded_file(),
            Some(&EncodedFile::from_bytes(b"keep"))
        );
        assert_eq!(session.error_message(), Some("Could not read file."));
    }
}
