use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::contacts::core::contact::Contact;
use crate::modules::contacts::core::fields::DATE_FORMAT;
use crate::shell::state::AppState;

/// Dates and salaries cross the GraphQL boundary as strings so decimals keep
/// their exact digits.
#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlContact {
    pub id: i64,
    pub name: String,
    pub date_of_birth: String,
    pub married: bool,
    pub phone: String,
    pub salary: String,
}

impl From<Contact> for GqlContact {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            date_of_birth: c.date_of_birth.format(DATE_FORMAT).to_string(),
            married: c.married,
            phone: c.phone,
            salary: c.salary.to_string(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn contacts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlContact>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.repository.get_all().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn contact(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlContact>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.get_by_id(id).await?.map(Into::into))
    }
}
