use serde::{Deserialize, Serialize};

/// File name offered to the browser for table exports
pub const CSV_FILE_NAME: &str = "results.csv";

/// A rendered table waiting for the shell to trigger the download
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

/// One numbered text input of the page form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputRow {
    pub number: u32,
    /// Form field name, `input{number}`
    pub name: String,
    /// Caption shown next to the field, `Input {number}`
    pub label: String,
    /// Pre-filled value, `None` leaves the field empty and uncontrolled
    pub value: Option<String>,
}

impl InputRow {
    pub fn new(number: u32, value: Option<String>) -> Self {
        Self {
            number,
            name: format!("input{number}"),
            label: format!("Input {number}"),
            value,
        }
    }
}
