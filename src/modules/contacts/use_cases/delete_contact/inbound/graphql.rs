use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteContactMutation;

#[Object]
impl DeleteContactMutation {
    async fn delete_contact(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.delete_handler.handle(id).await?;
        Ok(true)
    }
}
