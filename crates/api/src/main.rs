use std::sync::Arc;

use dairysense_store::{MySqlAnalyticsStore, StoreConfig};

#[tokio::main]
async fn main() {
    dairysense_observability::init();

    let config = StoreConfig::from_env();
    let store = MySqlAnalyticsStore::connect(&config)
        .await
        .expect("failed to connect to MySQL");

    let app = dairysense_api::app::build_app(Arc::new(store));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5001".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
