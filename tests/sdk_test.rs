//! Runs the SDK-backed checker against endpoints that fail before reaching any provider.

use aptos_rpc_compare::{check_one, AptosRest, CheckError};
use eyre::Result;
use std::time::Duration;

#[tokio::test]
async fn test_unreachable_node_is_a_query_error() -> Result<()> {
    // nothing listens on port 1
    let rest = AptosRest::new(Some(Duration::from_secs(5)));
    let row = check_one(&rest, "RPC_3", "http://127.0.0.1:1/v1/view", "0x1").await;

    assert_eq!(row.base_url, "http://127.0.0.1:1/v1");
    assert!(matches!(row.error(), Some(CheckError::Query(_))));
    assert!(row.octas().is_none());

    Ok(())
}

#[tokio::test]
async fn test_unparseable_url_is_a_client_error() -> Result<()> {
    let row = check_one(&AptosRest::default(), "RPC_1", "fullnode without scheme", "0x1").await;

    assert!(matches!(row.error(), Some(CheckError::ClientConstruction(_))));
    assert!(row.error().unwrap().to_string().starts_with("NewClient: "));

    Ok(())
}

#[tokio::test]
async fn test_bad_account_is_reported_before_querying() -> Result<()> {
    let row = check_one(&AptosRest::default(), "RPC_2", "http://127.0.0.1:1/v1", "0xzz").await;

    assert!(matches!(row.error(), Some(CheckError::InvalidAccount(_))));
    assert_eq!(row.latency, Duration::ZERO);

    Ok(())
}
