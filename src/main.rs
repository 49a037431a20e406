use anyhow::Context;
use aquapulse::{
    app::{build_router, AppState},
    config::Config,
    services::{DataService, SessionStore},
    storage,
    worker::{self, SensorCache},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // The one process-wide profile store; everything below receives it injected
    let store = storage::open(&config.storage).context("Failed to open profile store")?;
    let session = SessionStore::new(store);

    let data = DataService::new(&config.data.dir);
    let sensors = SensorCache::default();

    // Periodic sensor refresh
    tokio::spawn(worker::refresher_process(
        data.clone(),
        sensors.clone(),
        config.dashboard.clone(),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState {
        session,
        data,
        sensors,
        config,
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Dashboard listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
