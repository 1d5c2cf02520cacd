pub mod u101_extract_financials;
