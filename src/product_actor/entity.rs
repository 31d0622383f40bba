use rust_decimal::Decimal;
use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};

/// Key generator for the catalog store.
pub fn next_product_id(_params: &ProductCreate) -> String {
    Uuid::new_v4().to_string()
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = (); // Catalog is read-only at runtime
    type Action = ();
    type ActionResult = ();

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a negative base price.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.base_price < Decimal::ZERO {
            return Err(format!("Negative base price for {}: {}", params.name, params.base_price));
        }
        Ok(Self {
            product_id: id,
            name: params.name,
            description: params.description,
            base_price: params.base_price,
            categories: params.categories,
            images: params.images,
            availability: params.availability,
            variants: params.variants,
            add_ons: params.add_ons,
        })
    }

    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
