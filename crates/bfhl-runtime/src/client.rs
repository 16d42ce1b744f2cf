use bfhl_types::{EncodedFile, RawInput, RequestPayload, ResponsePayload, SubmissionResult};
use tracing::{debug, warn};

use crate::transport::Transport;

/// Validate the input and build the request body. Never touches the network.
pub fn prepare_request(
    raw: &RawInput,
    file: Option<&EncodedFile>,
) -> SubmissionResult<RequestPayload> {
    let request = RequestPayload::from_input(raw, file)?;
    debug!(
        items = request.data.len(),
        with_file = request.file_b64.is_some(),
        "prepared request"
    );
    Ok(request)
}

/// Parse, send and decode in one step.
///
/// Invalid input is rejected before the transport is called.
pub async fn submit(
    transport: &dyn Transport,
    raw: &RawInput,
    file: Option<&EncodedFile>,
) -> SubmissionResult<ResponsePayload> {
    let request = prepare_request(raw, file)?;

    match transport.send(&request).await {
        Ok(response) => Ok(response),
        Err(failure) => {
            warn!(%failure, "submission failed");
            Err(failure.into())
        }
    }
}
