use super::LaunchStore;
use crate::errors::ConfigurationError;
use std::sync::{Arc, OnceLock};

/// Hands the session's [`LaunchStore`] to consumers.
///
/// Clones share one slot. Reading the slot before a store has been provided
/// fails with [`ConfigurationError::OutsideProviderScope`] instead of
/// producing an empty default store.
#[derive(Clone, Default)]
pub struct StoreScope {
    slot: Arc<OnceLock<Arc<LaunchStore>>>,
}

impl StoreScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the store; only once per scope.
    pub fn provide(&self, store: Arc<LaunchStore>) -> Result<(), ConfigurationError> {
        self.slot
            .set(store)
            .map_err(|_| ConfigurationError::AlreadyProvided)
    }

    pub fn use_store(&self) -> Result<Arc<LaunchStore>, ConfigurationError> {
        self.slot
            .get()
            .cloned()
            .ok_or(ConfigurationError::OutsideProviderScope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::LaunchGateway;
    use crate::domain::LaunchRecord;
    use crate::errors::TransportError;
    use async_trait::async_trait;

    struct EmptyGateway;

    #[async_trait]
    impl LaunchGateway for EmptyGateway {
        async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, TransportError> {
            Ok(Vec::new())
        }
    }

    fn store() -> Arc<LaunchStore> {
        Arc::new(LaunchStore::new(Arc::new(EmptyGateway)))
    }

    #[test]
    fn test_use_before_provide_fails_fast() {
        let scope = StoreScope::new();
        assert_eq!(
            scope.use_store().err(),
            Some(ConfigurationError::OutsideProviderScope)
        );
    }

    #[test]
    fn test_clones_share_the_provided_store() {
        let scope = StoreScope::new();
        let consumer = scope.clone();
        let provided = store();

        scope.provide(Arc::clone(&provided)).expect("provide");
        let seen = consumer.use_store().expect("store");
        assert!(Arc::ptr_eq(&provided, &seen));
    }

    #[test]
    fn test_second_provide_is_rejected() {
        let scope = StoreScope::new();
        scope.provide(store()).expect("first provide");
        assert_eq!(
            scope.provide(store()).err(),
            Some(ConfigurationError::AlreadyProvided)
        );
    }
}
