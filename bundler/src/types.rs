//! Bundler-specific data types

use std::fmt;

use shared::{BundleTemplate, Product, ProductId, ResolvedBundle};

/// Bearer credential for the cart service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Blank tokens count as logged out
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Outcome of submitting one bundle to the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// Every product in the bundle was added
    Added { bundle_id: String, items_added: usize },
    /// No credential stored; nothing was sent
    LoginRequired,
    /// A submission for this bundle is already running
    InProgress { bundle_id: String },
    /// Submission stopped at the first failing product; earlier adds persist
    Failed {
        bundle_id: String,
        product_id: ProductId,
        message: String,
        items_added: usize,
    },
}

impl CartOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CartOutcome::Added { .. })
    }
}

impl fmt::Display for CartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOutcome::Added { .. } => write!(f, "All items added to cart."),
            CartOutcome::LoginRequired => write!(f, "Please log in to add bundle to cart."),
            CartOutcome::InProgress { bundle_id } => write!(f, "Bundle {bundle_id} is already being added."),
            CartOutcome::Failed { message, .. } => write!(f, "{message}"),
        }
    }
}

/// Totals computed for one bundle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundlePricing {
    pub total_price: f64,
    pub bundle_price: f64,
}

/// Products loaded for one refresh, in catalog order
pub type Catalog = Vec<Product>;

/// Storefront shell state, replaced wholesale on each refresh
#[derive(Debug, Clone, Default)]
pub struct StorefrontState {
    pub catalog: Catalog,
    pub templates: Vec<BundleTemplate>,
    pub bundles: Vec<ResolvedBundle>,
    pub using_default_templates: bool,
}

impl StorefrontState {
    pub fn new() -> Self {
        Self::default()
    }
}
