// In memory implementation of the ContactRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Assign increasing ids starting at 1.
// - Store salaries with two fractional digits, like the persisted column.
// - Insert a batch under a single write lock so it lands all at once.

use crate::modules::contacts::core::contact::{Contact, ContactRecord};
use crate::shared::infrastructure::contact_repository::{ContactRepository, RepositoryError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

const SALARY_SCALE: i64 = 2;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Contact>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Contact repository offline".into()));
        }
        Ok(())
    }
}

fn stored(mut contact: Contact) -> Contact {
    contact.salary = contact.salary.round(SALARY_SCALE);
    contact
}

#[async_trait::async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn get_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create_range(&self, records: &[ContactRecord]) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        for record in records {
            table.last_id += 1;
            let id = table.last_id;
            table
                .rows
                .insert(id, stored(Contact::from_record(id, record.clone())));
        }
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&contact.id) {
            Some(row) => {
                *row = stored(contact.clone());
                Ok(())
            }
            None => Err(RepositoryError::NotFound(contact.id)),
        }
    }

    async fn delete(&self, contact: &Contact) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.table
            .write()
            .await
            .rows
            .remove(&contact.id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(contact.id))
    }
}
