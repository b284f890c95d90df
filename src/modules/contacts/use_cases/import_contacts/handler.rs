use crate::modules::contacts::core::contact::ContactRecord;
use crate::modules::contacts::core::validation::{Validator, create_validator};
use crate::modules::contacts::use_cases::errors::ApplicationError;
use crate::modules::contacts::use_cases::import_contacts::command::ImportContacts;
use crate::modules::contacts::use_cases::import_contacts::outcome::ImportOutcome;
use crate::modules::contacts::use_cases::import_contacts::pipeline::import_contacts;
use crate::shared::infrastructure::contact_repository::ContactRepository;
use std::sync::Arc;

pub struct ImportContactsHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    repository: Arc<TRepository>,
    validator: Validator<ContactRecord>,
}

impl<TRepository> ImportContactsHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self {
            repository,
            validator: create_validator(),
        }
    }

    /// Runs the import pipeline and stores an accepted batch with one
    /// `create_range` call. A rejected batch is returned untouched and
    /// nothing is stored.
    pub async fn handle(&self, command: ImportContacts) -> Result<ImportOutcome, ApplicationError> {
        let ImportContacts {
            file_name,
            size_bytes,
            content,
            today,
        } = command;
        tracing::debug!(%file_name, size_bytes, "contact import started");

        let outcome = import_contacts(
            &file_name,
            content.as_deref(),
            size_bytes,
            &self.validator,
            today,
        )
        .inspect_err(|error| tracing::warn!(%file_name, %error, "contact import failed"))?;

        match &outcome {
            ImportOutcome::Accepted { contacts } => {
                self.repository.create_range(contacts).await.inspect_err(
                    |error| tracing::error!(%file_name, %error, "storing imported contacts failed"),
                )?;
                tracing::info!(%file_name, imported = contacts.len(), "contacts imported");
            }
            ImportOutcome::Rejected { row_errors } => {
                tracing::info!(%file_name, invalid_rows = row_errors.len(), "contact import rejected");
            }
        }
        Ok(outcome)
    }
}
