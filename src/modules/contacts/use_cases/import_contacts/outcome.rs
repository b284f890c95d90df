use serde::Serialize;
use thiserror::Error;

use crate::modules::contacts::core::contact::ContactRecord;

/// Rejections raised before a single byte of the upload is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty file")]
    Empty,

    #[error("must be a CSV file")]
    NotCsv,
}

/// Terminal failures of an import. Neither leaves a partial result behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("CSV parsing error at line {line}: {message}")]
    Parse { line: u64, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row_number: u64,
    pub messages: Vec<String>,
}

/// Result of a fully parsed upload. `Rejected` never carries accepted
/// contacts: one invalid row voids the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Accepted { contacts: Vec<ContactRecord> },
    Rejected { row_errors: Vec<RowError> },
}
