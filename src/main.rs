use petition_app::{
    ledger::LedgerClient, relay::MessageRelay, router, storage, AppState, Config,
};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.cache_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let cache = storage::load_cache(&config.cache_path).await;
    if config.ledger_url.is_none() {
        info!("no LEDGER_URL configured, running on the local cache only");
    }

    let ledger = config.ledger_url.clone().map(LedgerClient::new);
    let relay = MessageRelay::new(config.relay_url.clone());
    let state = AppState::new(config.cache_path.clone(), cache, ledger, relay);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
