//! Core shared types for catalog products and bundle templates

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Opaque product identifier
///
/// Catalog services hand out either integers or strings; both are kept in
/// their textual form so ids compare and hash the same way regardless of
/// which wire shape produced them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidProductId { input: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Int(i64),
            Text(String),
        }

        match WireId::deserialize(deserializer)? {
            WireId::Int(id) => Ok(Self::from(id)),
            WireId::Text(id) => Ok(Self(id)),
        }
    }
}

/// Fixed storefront category taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Protein,
    #[serde(rename = "Pre-Workout")]
    PreWorkout,
    Recovery,
    Strength,
    Vitamines,
    Performance,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Protein,
        Category::PreWorkout,
        Category::Recovery,
        Category::Strength,
        Category::Vitamines,
        Category::Performance,
    ];

    /// Display label, also used for name matching during resolution
    pub fn label(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::PreWorkout => "Pre-Workout",
            Category::Recovery => "Recovery",
            Category::Strength => "Strength",
            Category::Vitamines => "Vitamines",
            Category::Performance => "Performance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Exact label lookup. Free-text labels go through the normalizer instead.
impl FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SharedError::UnknownCategory { label: s.to_string() })
    }
}

/// Normalized catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    /// Empty when the catalog supplied no image
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            image_url: String::new(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// One slot of a bundle template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Requirement {
    pub fn by_id(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }

    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Exact product reference, ignoring empty ids
    pub fn exact_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|kw| !kw.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|cat| !cat.is_empty())
    }
}

/// Abstract recipe for a promotional pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleTemplate {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_percent: f64,
    #[serde(default)]
    pub fixed_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Slot order is significant
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Requirement>,
}

impl BundleTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, discount_percent: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            discount_percent,
            fixed_price: None,
            image_url: None,
            items: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fixed_price(mut self, fixed_price: f64) -> Self {
        self.fixed_price = Some(fixed_price);
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_item(mut self, requirement: Requirement) -> Self {
        self.items.push(requirement);
        self
    }
}

/// A template with its slots filled from a concrete catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBundle {
    #[serde(flatten)]
    pub template: BundleTemplate,
    pub resolved_items: Vec<Product>,
    pub total_price: f64,
    pub bundle_price: f64,
}

impl ResolvedBundle {
    pub fn id(&self) -> &str {
        &self.template.id
    }

    /// Ids in resolved order, ready for cart submission
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.resolved_items.iter().map(|p| p.id.clone()).collect()
    }

    pub fn is_purchasable(&self) -> bool {
        !self.resolved_items.is_empty()
    }

    /// Bundle artwork, falling back to the first resolved product's image
    pub fn display_image(&self) -> Option<&str> {
        self.template
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.resolved_items
                    .first()
                    .map(|p| p.image_url.as_str())
                    .filter(|url| !url.is_empty())
            })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_id_accepts_numbers_and_strings() {
        let numeric: ProductId = serde_json::from_value(json!(42)).unwrap();
        let textual: ProductId = serde_json::from_value(json!("42")).unwrap();

        assert_eq!(numeric, textual);
        assert_eq!(numeric.to_string(), "42");
        assert!(serde_json::from_value::<ProductId>(json!(true)).is_err());
    }

    #[test]
    fn test_product_id_from_str_rejects_blank() {
        assert!("  ".parse::<ProductId>().is_err());
        assert_eq!(" sku-1 ".parse::<ProductId>().unwrap().as_str(), "sku-1");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::PreWorkout.to_string(), "Pre-Workout");
        assert_eq!("vitamines".parse::<Category>().unwrap(), Category::Vitamines);
        assert!(matches!(
            "snacks".parse::<Category>(),
            Err(SharedError::UnknownCategory { .. })
        ));
        assert_eq!(serde_json::to_value(Category::PreWorkout).unwrap(), json!("Pre-Workout"));
    }

    #[test]
    fn test_template_from_bundle_service_payload() {
        let payload = json!({
            "id": "summer-pack",
            "slug": "summer-pack",
            "name": "Summer Pack",
            "description": null,
            "discountPercent": null,
            "fixedPrice": 49.9,
            "imageUrl": "https://cdn.example/summer.png",
            "items": [
                {"productId": 7},
                {"category": "Protein", "keyword": "whey"}
            ],
            "created_at": "2024-05-01T10:00:00"
        });

        let template: BundleTemplate = serde_json::from_value(payload).unwrap();

        assert_eq!(template.id, "summer-pack");
        assert_eq!(template.description, "");
        assert_eq!(template.discount_percent, 0.0);
        assert_eq!(template.fixed_price, Some(49.9));
        assert_eq!(template.items.len(), 2);
        assert_eq!(template.items[0].exact_id(), Some(&ProductId::from("7")));
        assert_eq!(template.items[1].keyword(), Some("whey"));
    }

    #[test]
    fn test_template_with_null_items() {
        let template: BundleTemplate =
            serde_json::from_value(json!({"id": "x", "name": "X", "items": null})).unwrap();
        assert!(template.items.is_empty());
    }

    #[test]
    fn test_requirement_ignores_empty_fields() {
        let requirement = Requirement {
            product_id: Some(ProductId::from("")),
            category: Some(String::new()),
            keyword: Some(String::new()),
        };

        assert!(requirement.exact_id().is_none());
        assert!(requirement.category().is_none());
        assert!(requirement.keyword().is_none());
    }

    #[test]
    fn test_display_image_fallback() {
        let template = BundleTemplate::new("b", "B", 10.0);
        let mut bundle = ResolvedBundle {
            template,
            resolved_items: vec![Product::new("1", "Whey", Category::Protein, 30.0).with_image("whey.png")],
            total_price: 30.0,
            bundle_price: 27.0,
        };

        assert_eq!(bundle.display_image(), Some("whey.png"));

        bundle.template.image_url = Some("bundle.png".to_string());
        assert_eq!(bundle.display_image(), Some("bundle.png"));

        bundle.resolved_items.clear();
        bundle.template.image_url = Some(String::new());
        assert_eq!(bundle.display_image(), None);
        assert!(!bundle.is_purchasable());
    }

    #[test]
    fn test_resolved_bundle_serializes_flat() {
        let bundle = ResolvedBundle {
            template: BundleTemplate::new("b", "B", 10.0),
            resolved_items: vec![],
            total_price: 0.0,
            bundle_price: 0.0,
        };

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["id"], json!("b"));
        assert_eq!(value["discountPercent"], json!(10.0));
        assert_eq!(value["resolvedItems"], json!([]));
        assert_eq!(value["bundlePrice"], json!(0.0));
    }
}
