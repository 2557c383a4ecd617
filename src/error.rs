use thiserror::Error;

use crate::validation::FieldId;

/// Errors crossing the submission boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("persistence service rejected the event: status {code}")]
    Status { code: u16, message: String },
    #[error(transparent)]
    Incomplete(#[from] IncompleteDraft),
}

/// A field needed by normalization was still blank.
///
/// A clean full validation rules this out, so seeing it means a caller
/// normalized an unvalidated draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("draft is incomplete: {0} is not filled in")]
pub struct IncompleteDraft(pub FieldId);
