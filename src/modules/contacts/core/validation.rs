// Business rules for a single contact.
//
// A validator is an ordered list of independent field rules. Every rule runs
// and every violation is reported, in rule order. Edit validation is the
// create rule list with the identity rule appended.

use bigdecimal::BigDecimal;
use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::modules::contacts::core::contact::{Contact, ContactFields, ContactRecord};

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());

static SALARY_CEILING: Lazy<BigDecimal> =
    Lazy::new(|| BigDecimal::new(999_999_999_i64.into(), 2));

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 255;
const PHONE_MIN_LENGTH: usize = 7;
const PHONE_MAX_LENGTH: usize = 20;
const MAX_AGE_YEARS: u32 = 150;
const SALARY_DECIMAL_PLACES: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub type Rule<T> = fn(&T, NaiveDate) -> Vec<Violation>;

pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Validator<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    pub fn with_rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Runs every rule against `subject`. `today` anchors the date of birth
    /// window. An empty result means the subject is valid.
    pub fn validate(&self, subject: &T, today: NaiveDate) -> Vec<Violation> {
        self.rules
            .iter()
            .flat_map(|rule| rule(subject, today))
            .collect()
    }
}

pub fn contact_rules<T: ContactFields>() -> Vec<Rule<T>> {
    vec![
        name_rule::<T>,
        date_of_birth_rule::<T>,
        phone_rule::<T>,
        salary_rule::<T>,
    ]
}

pub fn create_validator() -> Validator<ContactRecord> {
    Validator::new(contact_rules())
}

pub fn edit_validator() -> Validator<Contact> {
    Validator::new(contact_rules()).with_rule(id_rule)
}

fn name_rule<T: ContactFields>(subject: &T, _today: NaiveDate) -> Vec<Violation> {
    let name = subject.name();
    let length = name.chars().count();
    let mut violations = Vec::new();
    if name.trim().is_empty() {
        violations.push(Violation::new("name", "Name is required"));
    }
    if length < NAME_MIN_LENGTH {
        violations.push(Violation::new(
            "name",
            "Name must be at least 2 characters",
        ));
    }
    if length > NAME_MAX_LENGTH {
        violations.push(Violation::new(
            "name",
            "Name cannot exceed 255 characters",
        ));
    }
    violations
}

fn date_of_birth_rule<T: ContactFields>(subject: &T, today: NaiveDate) -> Vec<Violation> {
    let date_of_birth = subject.date_of_birth();
    let mut violations = Vec::new();
    if date_of_birth >= today {
        violations.push(Violation::new(
            "date_of_birth",
            "Date of birth cannot be in the future",
        ));
    }
    let oldest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    if date_of_birth <= oldest {
        violations.push(Violation::new(
            "date_of_birth",
            "Date of birth must be valid (not older than 150 years)",
        ));
    }
    violations
}

fn phone_rule<T: ContactFields>(subject: &T, _today: NaiveDate) -> Vec<Violation> {
    let phone = subject.phone();
    let length = phone.chars().count();
    let mut violations = Vec::new();
    if phone.trim().is_empty() {
        violations.push(Violation::new("phone", "Phone is required"));
    } else if !PHONE_PATTERN.is_match(phone) {
        violations.push(Violation::new(
            "phone",
            "Phone must contain only digits, spaces, hyphens, parentheses, or plus sign",
        ));
    }
    if length < PHONE_MIN_LENGTH {
        violations.push(Violation::new(
            "phone",
            "Phone must be at least 7 characters",
        ));
    }
    if length > PHONE_MAX_LENGTH {
        violations.push(Violation::new(
            "phone",
            "Phone cannot exceed 20 characters",
        ));
    }
    violations
}

fn salary_rule<T: ContactFields>(subject: &T, _today: NaiveDate) -> Vec<Violation> {
    let salary = subject.salary();
    let zero = BigDecimal::from(0);
    let mut violations = Vec::new();
    if *salary == zero {
        violations.push(Violation::new("salary", "Salary is required"));
    }
    if *salary <= zero {
        violations.push(Violation::new("salary", "Salary must be greater than 0"));
    }
    // Trailing zeros don't count: 52000.500 is a valid amount.
    let (_, scale) = salary.normalized().as_bigint_and_exponent();
    if scale > SALARY_DECIMAL_PLACES {
        violations.push(Violation::new(
            "salary",
            "Salary cannot have more than 2 decimal places",
        ));
    }
    if *salary >= *SALARY_CEILING {
        violations.push(Violation::new(
            "salary",
            "Salary is too high (maximum 9,999,999.99)",
        ));
    }
    violations
}

fn id_rule(subject: &Contact, _today: NaiveDate) -> Vec<Violation> {
    if subject.id > 0 {
        Vec::new()
    } else {
        vec![Violation::new("id", "Contact ID must be valid")]
    }
}
