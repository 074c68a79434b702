//! In-process credential storage

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::traits::CredentialStore;
use crate::types::Credential;

/// Credential store holding the shopper's token in memory
#[derive(Clone, Default)]
pub struct RealCredentialStore {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl RealCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential; a blank token leaves it logged out
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Arc::new(RwLock::new(usable(credential))),
        }
    }

    /// Store a credential after login; blank tokens count as logged out
    pub async fn set(&self, credential: Credential) {
        *self.credential.write().await = usable(credential);
    }

    pub async fn clear(&self) {
        *self.credential.write().await = None;
    }
}

fn usable(credential: Credential) -> Option<Credential> {
    (!credential.is_blank()).then_some(credential)
}

#[async_trait]
impl CredentialStore for RealCredentialStore {
    async fn credential(&self) -> Option<Credential> {
        self.credential.read().await.clone()
    }
}
