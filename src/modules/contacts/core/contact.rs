use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact as read from one CSV row or an edit request. It has no identity
/// until the repository stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub married: bool,
    pub phone: String,
    pub salary: BigDecimal,
}

/// A stored contact. `id` is assigned by the repository and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub married: bool,
    pub phone: String,
    pub salary: BigDecimal,
}

impl Contact {
    pub fn from_record(id: i64, record: ContactRecord) -> Self {
        Self {
            id,
            name: record.name,
            date_of_birth: record.date_of_birth,
            married: record.married,
            phone: record.phone,
            salary: record.salary,
        }
    }
}

/// Read access to the fields both create and edit validation look at.
pub trait ContactFields {
    fn name(&self) -> &str;
    fn date_of_birth(&self) -> NaiveDate;
    fn phone(&self) -> &str;
    fn salary(&self) -> &BigDecimal;
}

impl ContactFields for ContactRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn salary(&self) -> &BigDecimal {
        &self.salary
    }
}

impl ContactFields for Contact {
    fn name(&self) -> &str {
        &self.name
    }

    fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn salary(&self) -> &BigDecimal {
        &self.salary
    }
}
