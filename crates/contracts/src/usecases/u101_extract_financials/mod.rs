pub mod request;
pub mod response;

pub use request::{ExtractRequest, FIELD_FILE, FIELD_PERIOD_END_DATE};
pub use response::{ExtractResponse, ExtractedFigures};
