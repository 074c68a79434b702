//! Storefront shell with dependency injection
//!
//! Loads the catalog and the bundle templates, resolves bundles against the
//! catalog snapshot, and submits resolved bundles to the cart one item at a
//! time.

use shared::{storefront_debug, storefront_error, storefront_info, storefront_warn};
use shared::logging::{log_progress, log_success};
use shared::{BundleTemplate, ProductId, ResolvedBundle};

use crate::core::{default_templates, resolve, shape_catalog};
use crate::error::BundlerError;
use crate::state::{create_shared_state, InFlight, SharedStorefrontState};
use crate::traits::{CartService, CatalogSource, CredentialStore, TemplateSource};
use crate::types::{CartOutcome, Catalog, Credential, StorefrontState};

const COMPONENT: &str = "storefront";

/// Storefront with injected collaborators
pub struct Storefront<C, T, K, S>
where
    C: CatalogSource,
    T: TemplateSource,
    K: CartService,
    S: CredentialStore,
{
    pub state: SharedStorefrontState,
    pub catalog_source: C,
    pub template_source: T,
    pub cart_service: K,
    pub credential_store: S,
    in_flight: InFlight,
}

impl<C, T, K, S> Storefront<C, T, K, S>
where
    C: CatalogSource,
    T: TemplateSource,
    K: CartService,
    S: CredentialStore,
{
    pub fn new(catalog_source: C, template_source: T, cart_service: K, credential_store: S) -> Self {
        Self {
            state: create_shared_state(StorefrontState::new()),
            catalog_source,
            template_source,
            cart_service,
            credential_store,
            in_flight: InFlight::new(),
        }
    }

    /// Fetch and shape the catalog; a failed fetch yields an empty catalog
    pub async fn load_catalog(&self) -> Catalog {
        match self.catalog_source.fetch_catalog().await {
            Ok(payload) => {
                let catalog = shape_catalog(&payload);
                storefront_debug!(COMPONENT, "Loaded {} catalog products", catalog.len());
                catalog
            }
            Err(e) => {
                storefront_warn!(COMPONENT, error = %e, "Catalog unavailable, continuing with an empty catalog");
                Vec::new()
            }
        }
    }

    /// Fetch custom templates; errors and empty lists fall back to the defaults.
    /// The flag is true when the defaults were used.
    pub async fn load_templates(&self) -> (Vec<BundleTemplate>, bool) {
        match self.template_source.fetch_templates().await {
            Ok(templates) if !templates.is_empty() => (templates, false),
            Ok(_) => {
                storefront_info!(COMPONENT, "No custom bundles defined, using default bundles");
                (default_templates(), true)
            }
            Err(e) => {
                storefront_warn!(COMPONENT, error = %e, "Bundle templates unavailable, using default bundles");
                (default_templates(), true)
            }
        }
    }

    /// Reload catalog and templates concurrently and re-resolve every bundle
    pub async fn refresh(&self) -> Vec<ResolvedBundle> {
        log_progress(COMPONENT, "Refreshing", "catalog and bundle templates");

        let (catalog, (templates, using_default_templates)) =
            tokio::join!(self.load_catalog(), self.load_templates());

        let bundles = resolve(&catalog, &templates);
        let purchasable = bundles.iter().filter(|b| b.is_purchasable()).count();

        {
            let mut state = self.state.write().await;
            *state = StorefrontState {
                catalog,
                templates,
                bundles: bundles.clone(),
                using_default_templates,
            };
        }

        log_success(
            COMPONENT,
            &format!("Resolved {} bundles ({} purchasable)", bundles.len(), purchasable),
        );
        bundles
    }

    /// Resolved bundles from the last refresh
    pub async fn bundles(&self) -> Vec<ResolvedBundle> {
        self.state.read().await.bundles.clone()
    }

    pub async fn bundle(&self, bundle_id: &str) -> Option<ResolvedBundle> {
        self.state
            .read()
            .await
            .bundles
            .iter()
            .find(|bundle| bundle.id() == bundle_id)
            .cloned()
    }

    pub async fn using_default_templates(&self) -> bool {
        self.state.read().await.using_default_templates
    }

    /// Whether a cart submission for this bundle is running
    pub fn is_adding(&self, bundle_id: &str) -> bool {
        self.in_flight.contains(bundle_id)
    }

    /// Submit the given products for a bundle using the stored credential
    pub async fn add_bundle_to_cart(&self, bundle_id: &str, product_ids: &[ProductId]) -> CartOutcome {
        let credential = self.credential_store.credential().await.filter(|c| !c.is_blank());
        let Some(credential) = credential else {
            storefront_info!(COMPONENT, bundle_id = %bundle_id, "Cart submission requires login");
            return CartOutcome::LoginRequired;
        };

        let Some(_guard) = self.in_flight.claim(bundle_id) else {
            storefront_debug!(COMPONENT, bundle_id = %bundle_id, "Cart submission already running");
            return CartOutcome::InProgress {
                bundle_id: bundle_id.to_string(),
            };
        };

        add_bundle_to_cart(&self.cart_service, bundle_id, product_ids, Some(&credential)).await
    }

    /// Submit a bundle from the last refresh by id
    pub async fn add_resolved_bundle(&self, bundle_id: &str) -> Option<CartOutcome> {
        let bundle = self.bundle(bundle_id).await?;
        Some(self.add_bundle_to_cart(bundle_id, &bundle.product_ids()).await)
    }
}

/// Add each product to the cart in order, stopping at the first failure.
///
/// Products added before a failure stay in the cart.
pub async fn add_bundle_to_cart<K>(
    cart: &K,
    bundle_id: &str,
    product_ids: &[ProductId],
    credential: Option<&Credential>,
) -> CartOutcome
where
    K: CartService + ?Sized,
{
    let Some(credential) = credential.filter(|c| !c.is_blank()) else {
        return CartOutcome::LoginRequired;
    };

    let mut items_added = 0;
    for product_id in product_ids {
        if let Err(e) = cart.add_item(product_id, credential).await {
            storefront_error!(
                COMPONENT,
                bundle_id = %bundle_id,
                product_id = %product_id,
                items_added,
                error = %e,
                "Cart submission aborted"
            );
            return failed(bundle_id, product_id, &e, items_added);
        }
        items_added += 1;
    }

    storefront_info!(COMPONENT, bundle_id = %bundle_id, items_added, "Bundle added to cart");
    CartOutcome::Added {
        bundle_id: bundle_id.to_string(),
        items_added,
    }
}

fn failed(bundle_id: &str, product_id: &ProductId, error: &BundlerError, items_added: usize) -> CartOutcome {
    CartOutcome::Failed {
        bundle_id: bundle_id.to_string(),
        product_id: product_id.clone(),
        message: error.user_message(),
        items_added,
    }
}
