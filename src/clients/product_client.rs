use std::collections::BTreeSet;

use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Category, Product, ProductCreate, ProductFilter};
use crate::product_actor::ProductError;

/// Most products returned by a single catalog query.
pub const MAX_PRODUCTS: usize = 500;

/// Client for interacting with the catalog store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        let id = self.inner.create(product).await?;
        info!(product_id = %id, "Product added to catalog");
        Ok(id)
    }

    /// Products matching `filter`, sorted by name.
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> = self
            .all_products()
            .await?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.product_id.cmp(&b.product_id)));
        products.truncate(MAX_PRODUCTS);
        debug!(product_count = products.len(), "Listed products");
        Ok(products)
    }

    /// Distinct category slugs across the catalog, in slug order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ProductError> {
        let slugs: BTreeSet<String> = self
            .all_products()
            .await?
            .into_iter()
            .flat_map(|p| p.categories)
            .collect();
        Ok(slugs.into_iter().map(Category::from_slug).collect())
    }
}
