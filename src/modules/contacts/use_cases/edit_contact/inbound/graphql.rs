use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::contacts::core::contact::Contact;
use crate::modules::contacts::core::fields::{parse_date, parse_decimal};
use crate::modules::contacts::use_cases::edit_contact::command::EditContact;
use crate::modules::contacts::use_cases::list_contacts::inbound::graphql::GqlContact;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct ContactInput {
    pub id: i64,
    pub name: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
    pub married: bool,
    pub phone: String,
    pub salary: String,
}

impl TryFrom<ContactInput> for Contact {
    type Error = async_graphql::Error;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        Ok(Contact {
            id: input.id,
            name: input.name,
            date_of_birth: parse_date("dateOfBirth", &input.date_of_birth)?,
            married: input.married,
            phone: input.phone,
            salary: parse_decimal("salary", &input.salary)?,
        })
    }
}

#[derive(Default)]
pub struct EditContactMutation;

#[Object]
impl EditContactMutation {
    async fn update_contact(
        &self,
        context: &Context<'_>,
        input: ContactInput,
    ) -> GqlResult<GqlContact> {
        let state = context.data_unchecked::<AppState>();
        let command = EditContact {
            contact: input.try_into()?,
            today: Utc::now().date_naive(),
        };
        let contact = state.edit_handler.handle(command).await?;
        Ok(contact.into())
    }
}
