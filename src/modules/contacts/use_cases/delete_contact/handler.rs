use crate::modules::contacts::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::contact_repository::ContactRepository;
use std::sync::Arc;

pub struct DeleteContactHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteContactHandler<TRepository>
where
    TRepository: ContactRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: i64) -> Result<(), ApplicationError> {
        let contact = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;

        self.repository.delete(&contact).await?;
        tracing::info!(contact_id = id, "contact deleted");
        Ok(())
    }
}
