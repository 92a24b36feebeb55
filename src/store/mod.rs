/// Session-scoped launch store
use crate::clients::LaunchGateway;
use crate::domain::LaunchCollectionState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

mod scope;

pub use scope::StoreScope;

/// User-facing message stored when a fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch launch data";

/// Single holder of fetched launch data and fetch status.
///
/// Consumers read snapshots or subscribe for changes; the only mutation they
/// can request is [`refresh`](Self::refresh). Overlapping refreshes are not
/// serialized. Whichever fetch resolves last decides `records` and `error`,
/// and the first one to finish clears `is_loading` even if another is still
/// in flight.
pub struct LaunchStore {
    gateway: Arc<dyn LaunchGateway>,
    state: watch::Sender<LaunchCollectionState>,
}

impl LaunchStore {
    /// Create a store in the loading state. Nothing is fetched until
    /// [`initialize`](Self::initialize) or [`refresh`](Self::refresh).
    pub fn new(gateway: Arc<dyn LaunchGateway>) -> Self {
        let (state, _) = watch::channel(LaunchCollectionState::default());
        Self { gateway, state }
    }

    /// Start the initial fetch in the background.
    ///
    /// `is_loading` is already true when this returns, before the fetch has
    /// made any progress.
    pub fn initialize(self: &Arc<Self>) -> JoinHandle<()> {
        self.begin();
        let store = Arc::clone(self);
        tokio::spawn(async move { store.refresh().await })
    }

    /// Re-fetch all launches, replacing `records` on success.
    ///
    /// Never fails: a transport error becomes [`FETCH_FAILED_MESSAGE`] in
    /// `error` and the previous records are kept.
    pub async fn refresh(&self) {
        self.begin();
        let _loading = LoadingGuard(&self.state);
        debug!("Refreshing launches");

        match self.gateway.fetch_launches().await {
            Ok(records) => {
                info!(count = records.len(), "Launch data refreshed");
                self.state.send_modify(|s| {
                    s.records = records;
                    s.error = None;
                });
            }
            Err(e) => {
                warn!(error = %e, "Launch refresh failed, keeping previous records");
                self.state.send_modify(|s| {
                    s.error = Some(FETCH_FAILED_MESSAGE.to_string());
                });
            }
        }
    }

    /// Current state
    pub fn snapshot(&self) -> LaunchCollectionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<LaunchCollectionState> {
        self.state.subscribe()
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }
}

/// Clears `is_loading` when a refresh ends, however it ends.
struct LoadingGuard<'a>(&'a watch::Sender<LaunchCollectionState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|s| s.is_loading = false);
    }
}
