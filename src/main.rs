/// Launch board entry point
use launch_board::clients::SpaceXClient;
use launch_board::config::AppConfig;
use launch_board::handlers::AppState;
use launch_board::routes::build_router;
use launch_board::store::{LaunchStore, StoreScope};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    let spacex_client = SpaceXClient::new(&config.spacex_api_url)?;
    info!(url = spacex_client.launches_url(), "Launch source configured");

    // One store per session, provided before anything can read it
    let store = Arc::new(LaunchStore::new(Arc::new(spacex_client)));
    let scope = StoreScope::new();
    scope.provide(Arc::clone(&store))?;
    store.initialize();

    watch_store(&store);

    let state = AppState {
        scope,
        default_page_size: config.default_page_size,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("launch_board listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Log every loading transition of the store
fn watch_store(store: &LaunchStore) {
    let mut rx = store.subscribe();
    tokio::spawn(async move {
        let mut was_loading = rx.borrow_and_update().is_loading;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if state.is_loading == was_loading {
                continue;
            }
            was_loading = state.is_loading;

            match (&state.error, state.is_loading) {
                (_, true) => info!("Fetching launches"),
                (Some(error), false) => warn!(%error, "Launch data unavailable"),
                (None, false) => info!(count = state.records.len(), "Launch data ready"),
            }
        }
    });
}
