use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::contacts::use_cases::delete_contact::inbound::graphql::DeleteContactMutation;
pub use crate::modules::contacts::use_cases::edit_contact::inbound::graphql::EditContactMutation;
pub use crate::modules::contacts::use_cases::list_contacts::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(EditContactMutation, DeleteContactMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
