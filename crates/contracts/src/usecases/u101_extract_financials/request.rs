use serde::{Deserialize, Serialize};

/// Multipart field carrying the PDF document
pub const FIELD_FILE: &str = "file";

/// Multipart field carrying the optional reporting period end date
pub const FIELD_PERIOD_END_DATE: &str = "period_end_date";

/// Request parameters for the extraction endpoint (everything except the
/// file itself, which travels as a multipart blob).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractRequest {
    /// Period end date as entered by the user, `YYYY-MM-DD` or empty
    pub period_end_date: String,
}

impl ExtractRequest {
    pub fn new(period_end_date: impl Into<String>) -> Self {
        Self {
            period_end_date: period_end_date.into(),
        }
    }

    /// Date value to put on the wire. An empty input means the field is
    /// omitted from the payload entirely, not sent as an empty string.
    pub fn period_end_date(&self) -> Option<&str> {
        if self.period_end_date.is_empty() {
            None
        } else {
            Some(&self.period_end_date)
        }
    }
}
