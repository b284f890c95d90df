use chrono::NaiveDate;

/// An uploaded file as it came off the multipart form. `content` is `None`
/// when the form carried no file at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContacts {
    pub file_name: String,
    pub size_bytes: u64,
    pub content: Option<Vec<u8>>,
    pub today: NaiveDate,
}
