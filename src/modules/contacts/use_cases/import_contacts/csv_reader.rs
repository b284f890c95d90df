// Header-driven CSV reading for contact uploads.
//
// Columns are located by header name, so their order in the file is free.
// Any structural problem or unconvertible cell stops the read at that line.

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

use crate::modules::contacts::core::contact::ContactRecord;
use crate::modules::contacts::core::fields::{FieldParseError, parse_bool, parse_date, parse_decimal};
use crate::modules::contacts::use_cases::import_contacts::outcome::ImportError;

const HEADER_LINE: u64 = 1;
const FIRST_DATA_ROW: u64 = 2;

const NAME: &str = "Name";
const DATE_OF_BIRTH: &str = "DateOfBirth";
const MARRIED: &str = "Married";
const PHONE: &str = "Phone";
const SALARY: &str = "Salary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub row_number: u64,
    pub record: ContactRecord,
}

struct Columns {
    name: usize,
    date_of_birth: usize,
    married: usize,
    phone: usize,
    salary: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, ImportError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| {
                    header
                        .trim_start_matches('\u{feff}')
                        .trim()
                        .eq_ignore_ascii_case(column)
                })
                .ok_or_else(|| ImportError::Parse {
                    line: HEADER_LINE,
                    message: format!("missing column '{column}'"),
                })
        };
        Ok(Self {
            name: find(NAME)?,
            date_of_birth: find(DATE_OF_BIRTH)?,
            married: find(MARRIED)?,
            phone: find(PHONE)?,
            salary: find(SALARY)?,
        })
    }

    fn read(&self, row: &StringRecord) -> Result<ContactRecord, FieldParseError> {
        let cell = |index: usize| row.get(index).unwrap_or_default();
        Ok(ContactRecord {
            name: cell(self.name).to_string(),
            date_of_birth: parse_date(DATE_OF_BIRTH, cell(self.date_of_birth))?,
            married: parse_bool(MARRIED, cell(self.married))?,
            phone: cell(self.phone).to_string(),
            salary: parse_decimal(SALARY, cell(self.salary))?,
        })
    }
}

fn structural_error(error: csv::Error) -> ImportError {
    ImportError::Parse {
        line: error.position().map_or(HEADER_LINE, |position| position.line()),
        message: error.to_string(),
    }
}

/// Reads every data row of `content`. Row numbers start at 2 because the
/// header is row 1.
pub fn read_contacts<R: Read>(content: R) -> Result<Vec<ParsedRow>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content);

    let headers = reader.headers().map_err(structural_error)?.clone();
    let columns = Columns::locate(&headers)?;

    let mut rows = Vec::new();
    for (row_number, result) in (FIRST_DATA_ROW..).zip(reader.records()) {
        let row = result.map_err(structural_error)?;
        let line = row
            .position()
            .map_or(row_number, |position| position.line());
        let record = columns.read(&row).map_err(|error| ImportError::Parse {
            line,
            message: error.to_string(),
        })?;
        rows.push(ParsedRow { row_number, record });
    }
    Ok(rows)
}
