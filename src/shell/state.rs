use crate::modules::contacts::use_cases::delete_contact::handler::DeleteContactHandler;
use crate::modules::contacts::use_cases::edit_contact::handler::EditContactHandler;
use crate::modules::contacts::use_cases::import_contacts::handler::ImportContactsHandler;
use crate::shared::infrastructure::contact_repository::ContactRepository;
use crate::shared::infrastructure::contact_repository::in_memory::InMemoryContactRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContactRepository + Send + Sync>,
    pub import_handler: Arc<ImportContactsHandler<InMemoryContactRepository>>,
    pub edit_handler: Arc<EditContactHandler<InMemoryContactRepository>>,
    pub delete_handler: Arc<DeleteContactHandler<InMemoryContactRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryContactRepository>) -> Self {
        Self {
            import_handler: Arc::new(ImportContactsHandler::new(repository.clone())),
            edit_handler: Arc::new(EditContactHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteContactHandler::new(repository.clone())),
            repository,
        }
    }
}
