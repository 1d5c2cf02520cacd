pub mod api_utils;
pub mod number_format;
