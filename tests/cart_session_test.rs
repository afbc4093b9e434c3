use anyhow::Result;
use httpmock::prelude::*;
use part_compare::app::shell;
use part_compare::core::cart::CartChange;
use part_compare::{CompareError, CompareSession, HttpPricingService, OutputFormat};

fn mock_offers(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200).json_body(serde_json::json!([
            {
                "manufacturerPartNumber": "B2",
                "manufacturer": "Y",
                "dataProvider": "P1",
                "volume": 5,
                "unitPrice": 3.0,
                "totalPrice": 15.0
            },
            {
                "manufacturerPartNumber": "B2",
                "manufacturer": "Y",
                "dataProvider": "P2",
                "volume": 20,
                "unitPrice": 2.5,
                "totalPrice": 50.0
            },
            {
                "manufacturerPartNumber": "C3",
                "manufacturer": "Z",
                "dataProvider": "P1",
                "volume": 0,
                "unitPrice": 1.0,
                "totalPrice": 0.0
            }
        ]));
    })
}

#[tokio::test]
async fn test_search_add_edit_remove_flow() -> Result<()> {
    let server = MockServer::start();
    let api_mock = mock_offers(&server);

    let mut session = CompareSession::new(HttpPricingService::new(server.url("/compare")));
    session.submit_search("B2", "5").await?;
    api_mock.assert();

    assert_eq!(session.select_offer(0)?, CartChange::Added(0));
    session.edit_cart_quantity(0, "15")?;

    let line = &session.cart_lines()[0];
    assert_eq!(line.volume, 15.0);
    assert!((line.total_price - 45.0).abs() < 1e-9);

    // Re-adding the same part from another provider resets the quantity.
    assert_eq!(session.select_offer(1)?, CartChange::Updated(0));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart_lines()[0].volume, 20.0);
    assert!((session.cart_lines()[0].total_price - 50.0).abs() < 1e-9);

    // A zero-volume quote cannot be priced and leaves the cart alone.
    let before = session.cart_lines().to_vec();
    assert!(matches!(
        session.select_offer(2),
        Err(CompareError::InvalidQuantity { .. })
    ));
    assert_eq!(session.cart_lines(), before.as_slice());

    session.remove_cart_item(0)?;
    assert!(session.cart().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_shell_script() -> Result<()> {
    let server = MockServer::start();
    let _api_mock = mock_offers(&server);

    let mut session = CompareSession::new(HttpPricingService::new(server.url("/compare")));
    let script = "search B2 5\nadd 1\nqty 1 abc\nqty 1 10\nrm 7\nbogus\ncart\nquit\nadd 2\n";
    let mut output = Vec::new();

    shell::run(&mut session, script.as_bytes(), &mut output, OutputFormat::Csv).await?;
    let text = String::from_utf8(output)?;

    assert!(text.contains("1,B2,Y,P1,5,3.00,15.00"));
    assert!(text.contains("Ignored quantity 'abc'."));
    assert!(text.contains("1,B2,Y,P1,10,3.00,30.00"));
    assert!(text.contains("❌ Cart has no item #7"));
    assert!(text.contains("❌ Unrecognized input 'bogus'"));

    // Nothing after `quit` runs.
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart_lines()[0].volume, 10.0);
    Ok(())
}

#[tokio::test]
async fn test_shell_reports_failed_search() -> Result<()> {
    let server = MockServer::start();
    let _api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(503);
    });

    let mut session = CompareSession::new(HttpPricingService::new(server.url("/compare")));
    let mut output = Vec::new();

    shell::run(
        &mut session,
        "search B2 5\nsearch B2\n".as_bytes(),
        &mut output,
        OutputFormat::Table,
    )
    .await?;
    let text = String::from_utf8(output)?;

    assert!(text.contains("❌ Error fetching data from the server."));
    assert!(text.contains("❌ Both Part Number and Volume are required."));
    Ok(())
}
