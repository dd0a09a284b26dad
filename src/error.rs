use thiserror::Error;

/// Unrecoverable failures of the round engine.
///
/// Per-submission rejections are not errors; they come back as
/// [`crate::models::Submission::Rejected`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The word-list provider had no root words to draw from
    #[error("no root words available: {0}")]
    ResourceUnavailable(String),
}
