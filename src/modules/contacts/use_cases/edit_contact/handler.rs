use crate::modules::contacts::core::contact::Contact;
use crate::modules::contacts::core::validation::{Validator, edit_validator};
use crate::modules::contacts::use_cases::edit_contact::command::EditContact;
use crate::modules::contacts::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::contact_repository::ContactRepository;
use std::sync::Arc;

pub struct EditContactHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    repository: Arc<TRepository>,
    validator: Validator<Contact>,
}

impl<TRepository> EditContactHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self {
            repository,
            validator: edit_validator(),
        }
    }

    pub async fn handle(&self, command: EditContact) -> Result<Contact, ApplicationError> {
        let EditContact { contact, today } = command;

        let violations = self.validator.validate(&contact, today);
        if !violations.is_empty() {
            return Err(ApplicationError::Invalid(violations));
        }
        if self.repository.get_by_id(contact.id).await?.is_none() {
            return Err(ApplicationError::NotFound(contact.id));
        }

        self.repository.update(&contact).await?;
        tracing::info!(contact_id = contact.id, "contact updated");

        self.repository
            .get_by_id(contact.id)
            .await?
            .ok_or(ApplicationError::NotFound(contact.id))
    }
}
