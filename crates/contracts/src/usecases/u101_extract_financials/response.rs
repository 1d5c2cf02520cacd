use serde::{Deserialize, Serialize};

/// Successful extraction result for a single reporting period.
///
/// The monetary figures stay exactly as the service sent them; parsing and
/// formatting are a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Closing date of the reporting period, `YYYY-MM-DD`
    pub period_end_date: String,

    /// Extracted figures, amounts in millions
    pub results: ExtractedFigures,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFigures {
    /// Revenue as a decimal-digit string
    pub revenue: String,

    /// Cost of sales as a decimal-digit string
    pub cos: String,
}
