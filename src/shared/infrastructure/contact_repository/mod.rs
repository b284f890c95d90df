// Repository port for stored contacts.
//
// The core codes against this trait; adapters decide where contacts live.
// `create_range` must store the whole batch or nothing.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::contacts::core::contact::{Contact, ContactRecord};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("contact with id {0} not found")]
    NotFound(i64),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, RepositoryError>;
    async fn create_range(&self, records: &[ContactRecord]) -> Result<(), RepositoryError>;
    async fn update(&self, contact: &Contact) -> Result<(), RepositoryError>;
    async fn delete(&self, contact: &Contact) -> Result<(), RepositoryError>;
}

pub mod in_memory;
