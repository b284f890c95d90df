// Shared test fixtures for contacts.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::contacts::core::contact::ContactRecord;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use rstest::fixture;
use std::str::FromStr;

/// The fixed "today" used by tests that exercise the date of birth window.
#[fixture]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

pub struct ContactRecordBuilder {
    inner: ContactRecord,
}

impl Default for ContactRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ContactRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: ContactRecord {
                name: "Ada Lovelace".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
                married: false,
                phone: "+1 (555) 123-4567".to_string(),
                salary: BigDecimal::from_str("52000.50").unwrap(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn date_of_birth(mut self, v: NaiveDate) -> Self {
        self.inner.date_of_birth = v;
        self
    }

    pub fn married(mut self, v: bool) -> Self {
        self.inner.married = v;
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn salary(mut self, v: BigDecimal) -> Self {
        self.inner.salary = v;
        self
    }

    pub fn build(self) -> ContactRecord {
        self.inner
    }
}

#[cfg(test)]
mod contact_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ContactRecordBuilder::new()
            .name("Grace Hopper")
            .date_of_birth(NaiveDate::from_ymd_opt(1906, 12, 9).unwrap())
            .married(true)
            .phone("555-0100")
            .salary(BigDecimal::from(1200))
            .build();

        assert_eq!(custom.name, "Grace Hopper");
        assert_eq!(
            custom.date_of_birth,
            NaiveDate::from_ymd_opt(1906, 12, 9).unwrap()
        );
        assert!(custom.married);
        assert_eq!(custom.phone, "555-0100");
        assert_eq!(custom.salary, BigDecimal::from(1200));
    }
}
