use chrono::NaiveDate;
use std::io::Read;

use crate::modules::contacts::core::contact::ContactRecord;
use crate::modules::contacts::core::validation::Validator;
use crate::modules::contacts::use_cases::import_contacts::csv_reader::{ParsedRow, read_contacts};
use crate::modules::contacts::use_cases::import_contacts::outcome::{
    ImportError, ImportOutcome, InputError, RowError,
};

const CSV_EXTENSION: &str = ".csv";

fn has_csv_extension(file_name: &str) -> bool {
    let name = file_name.as_bytes();
    name.len() >= CSV_EXTENSION.len()
        && name[name.len() - CSV_EXTENSION.len()..].eq_ignore_ascii_case(CSV_EXTENSION.as_bytes())
}

/// Turns an uploaded file into either a clean batch of contacts or the full
/// list of rows that broke a business rule.
///
/// The gates run in order and the first failure wins: presence, `.csv` file
/// name, parse (fail-fast), then validation of every row. The content is
/// only read once the first two gates pass, and it is dropped on return.
pub fn import_contacts<R: Read>(
    file_name: &str,
    content: Option<R>,
    size_bytes: u64,
    validator: &Validator<ContactRecord>,
    today: NaiveDate,
) -> Result<ImportOutcome, ImportError> {
    let content = match content {
        Some(content) if size_bytes > 0 => content,
        _ => return Err(InputError::Empty.into()),
    };
    if !has_csv_extension(file_name) {
        return Err(InputError::NotCsv.into());
    }

    let rows = read_contacts(content)?;
    Ok(decide(rows, validator, today))
}

fn decide(
    rows: Vec<ParsedRow>,
    validator: &Validator<ContactRecord>,
    today: NaiveDate,
) -> ImportOutcome {
    let mut contacts = Vec::with_capacity(rows.len());
    let mut row_errors = Vec::new();

    for ParsedRow { row_number, record } in rows {
        let violations = validator.validate(&record, today);
        if violations.is_empty() {
            contacts.push(record);
        } else {
            row_errors.push(RowError {
                row_number,
                messages: violations
                    .into_iter()
                    .map(|violation| violation.message.to_string())
                    .collect(),
            });
        }
    }

    if row_errors.is_empty() {
        ImportOutcome::Accepted { contacts }
    } else {
        ImportOutcome::Rejected { row_errors }
    }
}
