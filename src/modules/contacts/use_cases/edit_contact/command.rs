use chrono::NaiveDate;

use crate::modules::contacts::core::contact::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContact {
    pub contact: Contact,
    pub today: NaiveDate,
}
