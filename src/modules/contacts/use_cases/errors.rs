use thiserror::Error;

use crate::modules::contacts::core::validation::Violation;
use crate::modules::contacts::use_cases::import_contacts::outcome::ImportError;
use crate::shared::infrastructure::contact_repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("contact with id {0} not found")]
    NotFound(i64),

    #[error("contact rejected: {}", join_messages(.0))]
    Invalid(Vec<Violation>),
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message)
        .collect::<Vec<_>>()
        .join("; ")
}
