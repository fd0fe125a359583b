use thiserror::Error;

/// Errors surfaced by the exchange session shell.
///
/// Invalid amount text is not represented here; it degrades to empty
/// amounts inside the converter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Both amounts must be filled in before submitting")]
    IncompleteForm,

    #[error("The session has been closed")]
    SessionClosed,

    #[error("Exchange submission failed: {0}")]
    SubmissionFailed(String),
}
