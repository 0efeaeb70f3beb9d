mod metrics;
mod mock;
mod model;
mod options;
mod routes;
mod services;
mod state;
mod storage;
mod upstream;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let local = Arc::new(storage::LocalStore::open_from_env().expect("data directory init failed"));
    let mirrored_workers = services::store::load_mirror::<model::Worker>(&local, storage::WORKERS_KEY);
    let mirrored_bikes = services::store::load_mirror::<model::Bike>(&local, storage::BIKES_KEY);

    let upstream = upstream::UpstreamClient::from_env().expect("upstream client init failed");
    tracing::info!(base_url = upstream.base_url(), "prediction service configured");

    let config = services::forecast::ForecastConfig::from_env().expect("invalid forecast config");

    let state = state::AppState::new(Arc::new(upstream), local, config, mirrored_workers, mirrored_bikes);

    // Hydrate the three datasets in the background; the UI polls /api/status
    // until every one of them has settled.
    let _hydration = services::bootstrap::spawn_hydration(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bikeops dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
