// Text-to-type conversion for the typed contact fields.
//
// Both the CSV import and the GraphQL edit input go through these, so a value
// accepted in one place is accepted in the other.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("'{value}' is not a valid date for {field}, expected YYYY-MM-DD")]
    Date { field: &'static str, value: String },

    #[error("'{value}' is not a valid boolean for {field}")]
    Boolean { field: &'static str, value: String },

    #[error("'{value}' is not a valid decimal for {field}")]
    Decimal { field: &'static str, value: String },
}

pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, FieldParseError> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FieldParseError::Date {
        field,
        value: value.to_string(),
    })
}

pub fn parse_bool(field: &'static str, raw: &str) -> Result<bool, FieldParseError> {
    let value = raw.trim();
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(FieldParseError::Boolean {
            field,
            value: value.to_string(),
        }),
    }
}

pub fn parse_decimal(field: &'static str, raw: &str) -> Result<BigDecimal, FieldParseError> {
    let value = raw.trim();
    // BigDecimal also takes exponents and a leading '+', but never a ','.
    if value.is_empty() || value.contains(',') {
        return Err(FieldParseError::Decimal {
            field,
            value: value.to_string(),
        });
    }
    BigDecimal::from_str(value).map_err(|_| FieldParseError::Decimal {
        field,
        value: value.to_string(),
    })
}
