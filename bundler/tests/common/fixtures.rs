//! Catalog and template fixtures

use serde_json::{json, Value};
use shared::{BundleTemplate, Requirement};

pub struct TestFixtures;

impl TestFixtures {
    pub const TOKEN: &'static str = "shopper-token";
    pub const STACK_ID: &'static str = "strength-stack";

    /// Three-product catalog: protein, creatine and BCAA
    pub fn scenario_catalog() -> Value {
        json!([
            {"id": 1, "name": "Whey Protein", "category": "Protein", "price": 30.0},
            {"id": 2, "name": "Creatine Mono", "category": "Strength", "price": 20.0},
            {"id": 3, "name": "BCAA Blend", "category": "Recovery", "price": 15.0}
        ])
    }

    /// Same catalog, wrapped and using the alternate field names
    pub fn wrapped_catalog() -> Value {
        json!({
            "products": [
                {"id": "1", "name": "Whey Protein", "category": {"name": "Whey"}, "current_price": "30"},
                {"id": "2", "name": "Creatine Mono", "categoryName": "Creatine", "salePrice": 20, "imageUrl": "/img/creatine.png"},
                {"id": "3", "name": "BCAA Blend", "category_name": "BCAA", "price": 15, "image": "/img/bcaa.png"}
            ]
        })
    }

    /// Keyword slots first, then the protein category slot
    pub fn strength_stack() -> BundleTemplate {
        BundleTemplate::new(Self::STACK_ID, "Strength Stack", 15.0)
            .with_item(Requirement::by_keyword("creatine"))
            .with_item(Requirement::by_keyword("BCAA"))
            .with_item(Requirement::by_category("Protein"))
    }

    pub fn strength_stack_json() -> Value {
        json!([{
            "id": Self::STACK_ID,
            "name": "Strength Stack",
            "discountPercent": 15,
            "items": [
                {"keyword": "creatine"},
                {"keyword": "BCAA"},
                {"category": "Protein"}
            ]
        }])
    }
}
