use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: Some(alt.into()),
        }
    }
}

/// When a product can be ordered, e.g. `all` days between `11:00-22:00`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub days: String,
    pub times: String,
}

/// A mutually exclusive modifier of a product, such as its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub variant_id: String,
    pub name: String,
    #[serde(default)]
    pub price_delta: Decimal,
}

impl Variant {
    pub fn new(name: impl Into<String>, price_delta: Decimal) -> Self {
        Self {
            variant_id: Uuid::new_v4().to_string(),
            name: name.into(),
            price_delta,
        }
    }
}

/// A stackable modifier of a product, such as an extra topping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub add_on_id: String,
    pub name: String,
    #[serde(default)]
    pub price_delta: Decimal,
}

impl AddOn {
    pub fn new(name: impl Into<String>, price_delta: Decimal) -> Self {
        Self {
            add_on_id: Uuid::new_v4().to_string(),
            name: name.into(),
            price_delta,
        }
    }
}

/// Represents a menu item in the catalog.
///
/// Products are read-only while an order is priced; the pricing engine works
/// on a snapshot fetched from the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: Decimal,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

/// Builders for hand-made catalog entries in tests.
#[cfg(test)]
impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            product_id: id.into(),
            name: name.into(),
            description: None,
            base_price,
            categories: Vec::new(),
            images: Vec::new(),
            availability: None,
            variants: Vec::new(),
            add_ons: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_add_ons(mut self, add_ons: Vec<AddOn>) -> Self {
        self.add_ons = add_ons;
        self
    }
}

impl Product {
    pub fn find_variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.variant_id == variant_id)
    }

    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c == slug)
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub categories: Vec<String>,
    pub images: Vec<Image>,
    pub availability: Option<Availability>,
    pub variants: Vec<Variant>,
    pub add_ons: Vec<AddOn>,
}

/// Catalog search: a category slug and/or a case-insensitive name fragment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref() {
            Some(slug) if !slug.is_empty() => product.in_category(slug),
            _ => true,
        };
        let name_ok = match self.q.as_deref() {
            Some(q) if !q.is_empty() => product.name.to_lowercase().contains(&q.to_lowercase()),
            _ => true,
        };
        category_ok && name_ok
    }
}

/// A menu section derived from the category slugs used by products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

impl Category {
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let mut chars = slug.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
            None => String::new(),
        };
        Self { slug, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_filter_by_category_and_name() {
        let latte = Product::new("p1", "Artisanal Latte", dec!(4.00)).with_categories(&["coffee"]);
        let burger = Product::new("p2", "Urban Classic Burger", dec!(8.99)).with_categories(&["burgers"]);

        let coffee = ProductFilter { category: Some("coffee".into()), q: None };
        assert!(coffee.matches(&latte));
        assert!(!coffee.matches(&burger));

        let search = ProductFilter { category: None, q: Some("CLASSIC".into()) };
        assert!(search.matches(&burger));
        assert!(!search.matches(&latte));

        assert!(ProductFilter::default().matches(&latte));
    }

    #[test]
    fn test_category_name_is_capitalized_slug() {
        assert_eq!(Category::from_slug("burgers").name, "Burgers");
        assert_eq!(Category::from_slug("COFFEE").name, "Coffee");
        assert_eq!(Category::from_slug("").name, "");
    }
}
