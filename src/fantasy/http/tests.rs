//! Unit tests for the HTTP client and response classification

use super::*;
use crate::config::UrlLayout;
use crate::error::ErrorKind;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{any, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer, layout: UrlLayout) -> FantasyData {
    FantasyData::with_config(
        ClientConfig::new("test-key")
            .with_base_url(server.uri())
            .with_layout(layout),
    )
    .unwrap()
}

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[test]
    fn test_success_returns_payload_as_is() {
        let value = classify_response(StatusCode::OK, br#"[{"Week":1},{"Week":2}]"#).unwrap();
        assert_eq!(value, json!([{"Week": 1}, {"Week": 2}]));

        let scalar = classify_response(StatusCode::OK, b"2014").unwrap();
        assert_eq!(scalar, json!(2014));
    }

    #[test]
    fn test_unauthorized_is_invalid_api_key_regardless_of_body() {
        let bodies: [&[u8]; 3] = [
            b"",
            b"Access denied",
            br#"{"statusCode":401,"message":"Access denied"}"#,
        ];
        for body in bodies {
            let err = classify_response(StatusCode::UNAUTHORIZED, body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidApiKey);
        }
    }

    #[test]
    fn test_other_failures_carry_status_and_message() {
        let err = classify_response(
            StatusCode::FORBIDDEN,
            br#"{"statusCode":403,"message":"Out of call volume quota"}"#,
        )
        .unwrap_err();

        match err {
            FantasyDataError::RequestFailed { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message.as_deref(), Some("Out of call volume quota"));
            }
            other => panic!("Expected RequestFailed, got {other:?}"),
        }

        let err = classify_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        match err {
            FantasyDataError::RequestFailed { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_success_is_unavailable() {
        let err = classify_response(StatusCode::OK, b"<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, FantasyDataError::Malformed(_)));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_embedded_status_code_is_classified() {
        let err = classify_response(
            StatusCode::OK,
            br#"{"statusCode":401,"message":"Access denied due to invalid subscription key."}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidApiKey);

        let err = classify_response(StatusCode::OK, br#"{"statusCode":500}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
    }

    #[test]
    fn test_embedded_success_status_code_is_not_an_error() {
        let body = br#"{"statusCode":200,"Season":2016}"#;
        let value = classify_response(StatusCode::OK, body).unwrap();
        assert_eq!(value["Season"], 2016);
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(&json!(2014)).unwrap(), 2014);
        assert_eq!(coerce_integer(&json!(17.0)).unwrap(), 17);
        assert_eq!(coerce_integer(&json!("5")).unwrap(), 5);
        assert_eq!(coerce_integer(&json!(" 21 ")).unwrap(), 21);

        for bad in [json!(1.5), json!("current"), json!(null), json!([1]), json!({"Season": 1})] {
            let err = coerce_integer(&bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unavailable, "{bad}");
        }
    }

    #[test]
    fn test_into_list() {
        let items = into_list(json!([{"a": 1}, {"a": 2}, {"a": 3}])).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2]["a"], 3);

        let err = into_list(json!({"a": 1})).unwrap_err();
        assert!(matches!(err, FantasyDataError::UnexpectedPayload { .. }));
    }

    #[test]
    fn test_redacted_hides_key() {
        let url = Url::parse(
            "https://api.fantasydata.net/v3/nfl/scores/json/Teams?subscription-key=secret&x=1",
        )
        .unwrap();
        let shown = redacted(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("subscription-key=REDACTED"));
        assert!(shown.contains("x=1"));
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_call_sends_key_and_returns_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/nfl/scores/json/Schedules/2014REG"))
            .and(query_param("subscription-key", "test-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Week": 1}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, UrlLayout::V3);
        let result = client
            .call(
                Game::Nfl,
                "Schedules/{season}",
                Some(Category::Scores),
                &[("season", &"2014REG")],
            )
            .await
            .unwrap();

        assert_eq!(result, json!([{"Week": 1}]));
    }

    #[tokio::test]
    async fn test_each_layout_reaches_its_path() {
        let cases = [
            (UrlLayout::Standard, "/standard/json/CurrentWeek"),
            (UrlLayout::V2, "/nfl/v2/json/CurrentWeek"),
            (UrlLayout::V3, "/v3/nfl/scores/json/CurrentWeek"),
        ];

        for (layout, expected_path) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(expected_path))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!(5)))
                .expect(1)
                .mount(&mock_server)
                .await;

            let client = client_for(&mock_server, layout);
            let value = client
                .call(Game::Nfl, "CurrentWeek", Some(Category::Scores), &[])
                .await
                .unwrap();
            assert_eq!(value, json!(5), "{layout}");
        }
    }

    #[tokio::test]
    async fn test_missing_placeholder_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, UrlLayout::V3);
        let err = client
            .call(Game::Nfl, "Players/{team}", Some(Category::Stats), &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    }

    #[tokio::test]
    async fn test_unauthorized_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "statusCode": 401,
                "message": "Access denied due to invalid subscription key."
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, UrlLayout::V3);
        let err = client
            .call(Game::Nfl, "Teams", Some(Category::Scores), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, FantasyDataError::InvalidApiKey));
    }

    #[tokio::test]
    async fn test_server_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, UrlLayout::V3);
        let err = client
            .call(Game::Nba, "Stadiums", Some(Category::Scores), &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, UrlLayout::V3);
        let err = client
            .call(Game::Nfl, "Teams", Some(Category::Scores), &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let client = FantasyData::with_config(
            ClientConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();

        let err = client
            .call(Game::Nfl, "UpcomingSeason", Some(Category::Scores), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, FantasyDataError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!(2016))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = FantasyData::with_config(
            ClientConfig::new("test-key")
                .with_base_url(mock_server.uri())
                .with_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        let err = client
            .call(Game::Nfl, "UpcomingSeason", Some(Category::Scores), &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_construction_validates_config() {
        let err = FantasyData::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);

        let err = FantasyData::with_config(ClientConfig::new("k").with_base_url("not a url"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);

        let client = FantasyData::new("k").unwrap();
        assert_eq!(client.config().api_key(), "k");
    }

    #[test]
    fn test_url_for() {
        let client = FantasyData::new("k").unwrap();
        let request = ApiRequest::new(Game::Nba, Some(Category::Stats))
            .segment("PlayerGameStatsByDate")
            .segment("2015-12-05");

        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://api.fantasydata.net/v3/nba/stats/json/PlayerGameStatsByDate/2015-12-05?subscription-key=k"
        );
    }
}
