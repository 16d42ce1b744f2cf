use std::fmt;

use crate::presentation::view_models::SubmissionViewModel;

/// Text output of a submission is the rendered display and nothing else, so
/// it can be piped.
pub struct SubmissionView<'a> {
    data: &'a SubmissionViewModel,
}

impl<'a> SubmissionView<'a> {
    pub fn new(data: &'a SubmissionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SubmissionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.display)
    }
}
