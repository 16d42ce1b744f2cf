pub mod config;
pub mod form;
pub mod status;
pub mod submit;

use bfhl_types::SubmissionError;

/// Surface only the collapsed message; the cause stays in the chain for `{:#}`.
fn user_facing(err: SubmissionError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}
