//! Storefront state management

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;

use crate::types::StorefrontState;

/// Shared storefront state wrapper
pub type SharedStorefrontState = Arc<RwLock<StorefrontState>>;

/// Create new shared storefront state
pub fn create_shared_state(state: StorefrontState) -> SharedStorefrontState {
    Arc::new(RwLock::new(state))
}

/// Bundle ids with a cart submission currently running
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    bundles: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a bundle id; `None` when a submission for it is already running
    pub fn claim(&self, bundle_id: &str) -> Option<InFlightGuard> {
        let mut bundles = self.bundles.lock().unwrap_or_else(PoisonError::into_inner);
        if !bundles.insert(bundle_id.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            bundles: Arc::clone(&self.bundles),
            bundle_id: bundle_id.to_string(),
        })
    }

    pub fn contains(&self, bundle_id: &str) -> bool {
        self.bundles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(bundle_id)
    }
}

/// Releases the claim when dropped, including when the submitting future is cancelled
#[derive(Debug)]
pub struct InFlightGuard {
    bundles: Arc<Mutex<HashSet<String>>>,
    bundle_id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.bundles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.bundle_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_exclusive_per_bundle() {
        let in_flight = InFlight::new();

        let guard = in_flight.claim("muscle-gain");
        assert!(guard.is_some());
        assert!(in_flight.claim("muscle-gain").is_none());
        assert!(in_flight.claim("daily-health").is_some());
        assert!(in_flight.contains("muscle-gain"));

        drop(guard);
        assert!(!in_flight.contains("muscle-gain"));
        assert!(in_flight.claim("muscle-gain").is_some());
    }
}
