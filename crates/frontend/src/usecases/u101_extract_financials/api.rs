use contracts::usecases::common::ApiErrorBody;
use contracts::usecases::u101_extract_financials::{
    ExtractRequest, ExtractResponse, FIELD_FILE, FIELD_PERIOD_END_DATE,
};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// Submit a PDF to the extraction service. One attempt, no retries.
///
/// An empty period end date is omitted from the payload entirely.
pub async fn extract(
    file: &web_sys::File,
    request: &ExtractRequest,
) -> Result<ExtractResponse, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_blob(FIELD_FILE, file)
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    if let Some(date) = request.period_end_date() {
        form.append_with_str(FIELD_PERIOD_END_DATE, date)
            .map_err(|e| format!("Failed to attach date: {:?}", e))?;
    }

    // The browser supplies the multipart boundary for a FormData body
    let response = Request::post(&api_url("/api/extract/"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(service_error_message(status, &body));
    }

    response
        .json::<ExtractResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Prefer the structured `error` field of a failure body; any other body
/// shape falls back to a generic message carrying the status code.
fn service_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) => format!("Extraction failed (HTTP {})", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_is_surfaced_verbatim() {
        assert_eq!(
            service_error_message(400, r#"{"error":"Unsupported file format"}"#),
            "Unsupported file format"
        );
        assert_eq!(
            service_error_message(400, r#"{"error":"Invalid period_end_date format. Use YYYY-MM-DD"}"#),
            "Invalid period_end_date format. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_unstructured_error_falls_back_to_generic() {
        assert_eq!(
            service_error_message(502, "<html>Bad Gateway</html>"),
            "Extraction failed (HTTP 502)"
        );
        assert_eq!(service_error_message(500, ""), "Extraction failed (HTTP 500)");
        assert_eq!(
            service_error_message(400, r#"{"detail":"nope"}"#),
            "Extraction failed (HTTP 400)"
        );
    }
}
