use serde::{Deserialize, Serialize};

/// Failure body returned by the extraction service on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_error_body() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Unsupported file format"}"#).unwrap();
        assert_eq!(body.error, "Unsupported file format");
    }

    #[test]
    fn test_body_without_error_field_is_rejected() {
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"detail":"oops"}"#).is_err());
        assert!(serde_json::from_str::<ApiErrorBody>("<html>502</html>").is_err());
    }
}
