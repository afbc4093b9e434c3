use anyhow::Result;
use httpmock::prelude::*;
use part_compare::core::session::CompareSession;
use part_compare::domain::ports::PricingService;
use part_compare::domain::model::SearchRequest;
use part_compare::{CompareError, HttpPricingService, Offer, TomlConfig};
use std::time::Duration;

fn offers_json() -> serde_json::Value {
    serde_json::json!([
        {
            "manufacturerPartNumber": "A1",
            "manufacturer": "X",
            "dataProvider": "P1",
            "volume": 10,
            "unitPrice": 2.0,
            "totalPrice": 20.0
        },
        {
            "manufacturerPartNumber": "A1",
            "manufacturer": "X",
            "dataProvider": "P1",
            "volume": 10,
            "unitPrice": 2.0,
            "totalPrice": 20.0
        },
        {
            "manufacturerPartNumber": "A1",
            "manufacturer": "X",
            "dataProvider": "P2",
            "volume": 10,
            "unitPrice": 1.9,
            "totalPrice": 19.0
        }
    ])
}

/// 請求內容必須是 {partNumber, volume}，兩者皆為字串
#[tokio::test]
async fn test_search_posts_trimmed_request_and_dedupes() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/compare")
            .json_body(serde_json::json!({"partNumber": "A1", "volume": "10"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(offers_json());
    });

    let service = HttpPricingService::new(server.url("/compare"));
    let mut session = CompareSession::new(service);

    let results = session.submit_search(" A1 ", " 10 ").await?.to_vec();

    api_mock.assert();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Offer::new("A1", "X", "P1", 10.0, 2.0, 20.0));
    assert_eq!(results[1].data_provider, "P2");
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_search_failed_and_keeps_results() -> Result<()> {
    let server = MockServer::start();

    let mut ok_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200).json_body(offers_json());
    });

    let service = HttpPricingService::new(server.url("/compare"));
    let mut session = CompareSession::new(service);
    session.submit_search("A1", "10").await?;
    ok_mock.assert();
    ok_mock.delete();

    let failing_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(500);
    });

    let err = session.submit_search("A1", "20").await.unwrap_err();
    failing_mock.assert();

    assert!(matches!(err, CompareError::SearchFailed { .. }));
    assert_eq!(session.results().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_unusable_payload_is_search_failed() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200)
            .json_body(serde_json::json!({"status": "ok", "offers": "none"}));
    });

    let service = HttpPricingService::new(server.url("/compare"));
    let result = service
        .fetch_offers(&SearchRequest {
            part_number: "A1".to_string(),
            volume: "1".to_string(),
        })
        .await;

    api_mock.assert();
    assert!(matches!(result, Err(CompareError::SearchFailed { .. })));
    Ok(())
}

#[tokio::test]
async fn test_empty_response_clears_results() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200).json_body(serde_json::json!([]));
    });

    let service = HttpPricingService::new(server.url("/compare"));
    let mut session = CompareSession::new(service);

    let results = session.submit_search("NOPE", "1").await?;
    assert!(results.is_empty());
    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_missing_input_never_reaches_service() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200).json_body(serde_json::json!([]));
    });

    let service = HttpPricingService::new(server.url("/compare"));
    let mut session = CompareSession::new(service);

    let err = session.submit_search("A1", "   ").await.unwrap_err();
    assert!(matches!(err, CompareError::MissingSearchInput));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_configured_headers_and_timeout() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/compare")
            .header("X-Api-Key", "k-123");
        then.status(200).json_body(offers_json());
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[service]
endpoint = "{}"
timeout_seconds = 5

[service.headers]
X-Api-Key = "k-123"
"#,
        server.url("/compare")
    ))?;

    let service = HttpPricingService::from_config(&config);
    let mut session = CompareSession::new(service);
    session.submit_search("A1", "10").await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_slow_service_times_out() -> Result<()> {
    let server = MockServer::start();

    let _api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(offers_json());
    });

    let service =
        HttpPricingService::new(server.url("/compare")).with_timeout(Duration::from_millis(50));
    let mut session = CompareSession::new(service);

    let err = session.submit_search("A1", "10").await.unwrap_err();
    assert!(matches!(err, CompareError::SearchFailed { .. }));
    assert!(session.results().is_empty());
    Ok(())
}
