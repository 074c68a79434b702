//! Bundle resolution: filling template slots with concrete catalog products
//!
//! Each slot is matched by exact id, then keyword, then category, then any
//! remaining product, always in catalog order. A product used by one slot is
//! excluded from the later slots of the same bundle only; other bundles start
//! from an empty exclusion set. Slots nothing can fill are dropped.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use shared::{BundleTemplate, Category, Product, ProductId, Requirement, ResolvedBundle};
use crate::core::normalizer::normalize;
use crate::core::pricing::price;

/// Read-only lookup structures over one catalog snapshot
pub struct CatalogIndex<'a> {
    products: &'a [Product],
    lowercase_names: Vec<String>,
    by_id: HashMap<&'a ProductId, usize>,
}

/// Product ids already consumed by the bundle being resolved
pub type Exclusion<'a> = HashSet<&'a ProductId>;

impl<'a> CatalogIndex<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            // first occurrence wins when a catalog repeats an id
            by_id.entry(&product.id).or_insert(position);
        }

        Self {
            products,
            lowercase_names: products.iter().map(|p| p.name.to_lowercase()).collect(),
            by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First unused product in catalog order satisfying `predicate`
    fn first_unused<F>(&self, excluded: &Exclusion<'a>, predicate: F) -> Option<&'a Product>
    where
        F: Fn(&Product, &str) -> bool,
    {
        self.products
            .iter()
            .zip(&self.lowercase_names)
            .find(|(product, name)| !excluded.contains(&product.id) && predicate(product, name))
            .map(|(product, _)| product)
    }

    fn pick_by_id(&self, id: &ProductId, excluded: &Exclusion<'a>) -> Option<&'a Product> {
        let position = *self.by_id.get(id)?;
        let product = &self.products[position];
        (!excluded.contains(&product.id)).then_some(product)
    }

    fn pick_by_keyword(&self, keyword: &str, excluded: &Exclusion<'a>) -> Option<&'a Product> {
        let keyword = keyword.to_lowercase();
        self.first_unused(excluded, |_, name| name.contains(&keyword))
    }

    fn pick_by_category(&self, category: Category, excluded: &Exclusion<'a>) -> Option<&'a Product> {
        let label = category.label().to_lowercase();
        self.first_unused(excluded, |product, name| {
            product.category == category || name.contains(&label)
        })
    }

    fn pick_any(&self, excluded: &Exclusion<'a>) -> Option<&'a Product> {
        self.first_unused(excluded, |_, _| true)
    }

    /// Fill one slot, trying each matching rule in priority order
    pub fn fill_slot(&self, requirement: &Requirement, excluded: &Exclusion<'a>) -> Option<&'a Product> {
        requirement
            .exact_id()
            .and_then(|id| self.pick_by_id(id, excluded))
            .or_else(|| {
                requirement
                    .keyword()
                    .and_then(|keyword| self.pick_by_keyword(keyword, excluded))
            })
            .or_else(|| {
                requirement
                    .category()
                    .and_then(|category| self.pick_by_category(normalize(category), excluded))
            })
            .or_else(|| self.pick_any(excluded))
    }

    /// Resolve the slots of one template, in declared order
    pub fn resolve_items(&self, template: &BundleTemplate) -> Vec<Product> {
        let mut excluded: Exclusion<'a> = HashSet::with_capacity(template.items.len());
        let mut resolved = Vec::with_capacity(template.items.len());

        for (slot, requirement) in template.items.iter().enumerate() {
            match self.fill_slot(requirement, &excluded) {
                Some(product) => {
                    excluded.insert(&product.id);
                    resolved.push(product.clone());
                }
                None => debug!("Bundle {} dropped unfillable slot {}", template.id, slot),
            }
        }

        resolved
    }

    /// Resolve and price one template
    pub fn resolve_bundle(&self, template: &BundleTemplate) -> ResolvedBundle {
        let resolved_items = self.resolve_items(template);
        let pricing = price(&resolved_items, template.discount_percent, template.fixed_price);

        ResolvedBundle {
            template: template.clone(),
            resolved_items,
            total_price: pricing.total_price,
            bundle_price: pricing.bundle_price,
        }
    }
}

/// Resolve every template against one catalog snapshot
pub fn resolve(catalog: &[Product], templates: &[BundleTemplate]) -> Vec<ResolvedBundle> {
    let index = CatalogIndex::new(catalog);
    templates.iter().map(|template| index.resolve_bundle(template)).collect()
}
