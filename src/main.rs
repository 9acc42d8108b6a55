use beer_stock::application::context::AppContext;
use beer_stock::config::{self, StoreBackend};
use beer_stock::infrastructure::db::postgres::PostgresDatabase;
use beer_stock::infrastructure::db::repositories::Repositories;
use beer_stock::interface::http;
use beer_stock::interface::http::state::AppState;
use beer_stock::telemetry;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Step 1: Load configuration and install logging and metrics.
    let settings = config::load().expect("load config");
    telemetry::init_tracing(&settings.log);
    let metrics = telemetry::init_metrics();

    // Step 2: Build repositories over the configured backend.
    let repos = match settings.db.backend {
        StoreBackend::Postgres => {
            let db = Arc::new(
                PostgresDatabase::from_settings(&settings.db)
                    .await
                    .expect("connect database"),
            );
            Repositories::postgres(db)
        }
        StoreBackend::Memory => Repositories::in_memory(),
    };
    info!(backend = ?settings.db.backend, "storage_ready");

    // Step 3: Assemble shared application context and HTTP state.
    let ctx = AppContext::new(repos, settings.stock.clone());
    let state = AppState::new(ctx, metrics);

    // Step 4: Build the HTTP app.
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 5: Bind and serve.
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");
    info!(addr = %bind_addr, "http_listening");

    axum::serve(listener, app).await.expect("serve");
}
