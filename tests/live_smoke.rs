use std::sync::Arc;

use bitso_api_client::auth::EnvCredentials;
use bitso_api_client::rest::BitsoRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("BITSO_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = BitsoRestClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    // Read-only call: lists withdrawals without moving funds.
    let withdrawals = client.get_withdrawals(None).await?;
    for withdrawal in withdrawals.iter().take(3) {
        assert!(!withdrawal.wid.is_empty());
    }

    Ok(())
}
