//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod fantasy_data_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Nothing listens on port 9 of the loopback interface
        let client = reqwest::Client::new();
        let result = client.get("http://127.0.0.1:9/").send().await;
        let reqwest_error = result.unwrap_err();
        let error = FantasyDataError::from(reqwest_error);

        match error {
            FantasyDataError::Unavailable(_) => (),
            _ => panic!("Expected Unavailable error variant"),
        }
        assert_eq!(error.kind(), ErrorKind::Unavailable);
        assert!(error.to_string().contains("Cannot connect"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = FantasyDataError::from(json_error);

        match error {
            FantasyDataError::Malformed(_) => (),
            _ => panic!("Expected Malformed error variant"),
        }
        assert_eq!(error.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty-fourteen".parse::<u16>().unwrap_err();
        let error = FantasyDataError::from(parse_error);

        match error {
            FantasyDataError::InvalidParameters { .. } => (),
            _ => panic!("Expected InvalidParameters error variant"),
        }
        assert_eq!(error.kind(), ErrorKind::InvalidParameters);
    }

    #[test]
    fn test_chrono_error_conversion() {
        let parse_error = chrono::NaiveDate::parse_from_str("2015-13-45", "%Y-%m-%d").unwrap_err();
        let error = FantasyDataError::from(parse_error);
        assert_eq!(error.kind(), ErrorKind::InvalidParameters);
    }

    #[test]
    fn test_unexpected_payload_error() {
        let error = FantasyDataError::UnexpectedPayload {
            expected: "an integer",
            found: "\"soon\"".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("expected an integer"));
        assert!(error_string.contains("\"soon\""));
        assert_eq!(error.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_invalid_api_key_error() {
        let error = FantasyDataError::InvalidApiKey;
        assert_eq!(error.to_string(), "Invalid API key");
        assert_eq!(error.kind(), ErrorKind::InvalidApiKey);
    }

    #[test]
    fn test_request_failed_error_without_message() {
        let error = FantasyDataError::RequestFailed {
            status: 503,
            message: None,
        };

        assert_eq!(error.to_string(), "Failed to get response (HTTP 503)");
        assert_eq!(error.kind(), ErrorKind::RequestFailed);
    }

    #[test]
    fn test_request_failed_error_with_message() {
        let error = FantasyDataError::RequestFailed {
            status: 403,
            message: Some("Out of call volume quota".to_string()),
        };

        assert_eq!(
            error.to_string(),
            "Failed to get response (HTTP 403): Out of call volume quota"
        );
    }

    #[test]
    fn test_invalid_parameters_error() {
        let error = FantasyDataError::invalid_parameters("unknown season type 'XYZ'");

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid method parameters"));
        assert!(error_string.contains("XYZ"));
        assert_eq!(error.kind(), ErrorKind::InvalidParameters);
    }

    #[test]
    fn test_error_debug_format() {
        let error = FantasyDataError::RequestFailed {
            status: 500,
            message: None,
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("RequestFailed"));
        assert!(debug_string.contains("500"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i64> {
            Ok(2014)
        }

        fn returns_error() -> Result<i64> {
            Err(FantasyDataError::InvalidApiKey)
        }

        assert_eq!(returns_result().unwrap(), 2014);
        assert!(returns_error().is_err());
    }
}
