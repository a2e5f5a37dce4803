use std::collections::HashMap;
use std::time::Duration;

use micro_http_client::cancel::CancellationToken;
use micro_http_client::header::{normalize_default_headers, to_header_map};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut headers = HashMap::from([
        ("accept".to_string(), "application/json".to_string()),
        ("Content-type".to_string(), "application/json".to_string()),
    ]);
    normalize_default_headers(&mut headers);

    let header_map = match to_header_map(&headers) {
        Ok(header_map) => header_map,
        Err(e) => {
            error!(cause = %e, "invalid request headers");
            return;
        }
    };
    info!(headers = ?header_map, "request headers ready");

    let source = CancellationToken::source();
    let token = source.token.clone();

    let request = tokio::spawn(async move {
        // stands in for a slow transport
        token.run_until_cancelled(tokio::time::sleep(Duration::from_secs(30))).await
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    source.cancel.cancel_with_message("user navigated away");

    match request.await {
        Ok(Ok(())) => info!("request finished"),
        Ok(Err(e)) => info!(cause = %e, "request cancelled"),
        Err(e) => error!(cause = %e, "request task failed"),
    }
}
