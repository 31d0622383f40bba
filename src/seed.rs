//! Demo catalog, coupons and settings for a fresh store.

use std::collections::BTreeMap;

use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::{info, instrument};

use crate::app_system::StorefrontSystem;
use crate::coupon_actor::CouponError;
use crate::domain::{
    AddOn, Availability, Brand, CouponCreate, DiscountType, Image, ProductCreate, Settings, Variant,
};
use crate::product_actor::ProductError;
use crate::settings_actor::SettingsError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Coupon(#[from] CouponError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Loads the demo data unless the catalog already has products.
///
/// Returns whether anything was written.
#[instrument(skip(system))]
pub async fn seed_demo_data(system: &StorefrontSystem) -> Result<bool, SeedError> {
    if !system.product_client.all_products().await?.is_empty() {
        info!("Catalog already populated, skipping seed");
        return Ok(false);
    }

    for product in demo_products() {
        system.product_client.create_product(product).await?;
    }
    for coupon in demo_coupons() {
        system.coupon_client.create_coupon(coupon).await?;
    }
    system.settings_client.put_settings(demo_settings()).await?;

    info!("Demo data seeded");
    Ok(true)
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    description: &str,
    base_price: rust_decimal::Decimal,
    category: &str,
    image: Image,
    times: &str,
    variants: Vec<Variant>,
    add_ons: Vec<AddOn>,
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: Some(description.to_string()),
        base_price,
        categories: vec![category.to_string()],
        images: vec![image],
        availability: Some(Availability {
            days: "all".to_string(),
            times: times.to_string(),
        }),
        variants,
        add_ons,
    }
}

pub fn demo_products() -> Vec<ProductCreate> {
    vec![
        product(
            "Urban Classic Burger",
            "Juicy beef patty, cheddar, lettuce, tomato, secret sauce.",
            dec!(8.99),
            "burgers",
            Image::new(
                "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?crop=entropy&cs=srgb&fm=jpg&q=85",
                "Gourmet burger",
            ),
            "11:00-22:00",
            vec![Variant::new("Regular", dec!(0.0)), Variant::new("Large", dec!(2.0))],
            vec![AddOn::new("Extra Cheese", dec!(1.0)), AddOn::new("Bacon", dec!(1.5))],
        ),
        product(
            "Smoky Double Burger",
            "Double beef, smoked gouda, caramelized onions.",
            dec!(12.5),
            "burgers",
            Image::new(
                "https://images.unsplash.com/photo-1550547660-d9450f859349?crop=entropy&cs=srgb&fm=jpg&q=85",
                "Burger dark background",
            ),
            "11:00-22:00",
            vec![Variant::new("Regular", dec!(0.0)), Variant::new("Large", dec!(2.5))],
            vec![AddOn::new("Jalapeño", dec!(0.8)), AddOn::new("Truffle Mayo", dec!(1.2))],
        ),
        product(
            "Artisanal Latte",
            "Hand-pulled espresso with velvety milk.",
            dec!(4.0),
            "coffee",
            Image::new(
                "https://images.unsplash.com/photo-1509042239860-f550ce710b93?crop=entropy&cs=srgb&fm=jpg&q=85",
                "Latte art",
            ),
            "07:00-20:00",
            vec![
                Variant::new("8 oz", dec!(0.0)),
                Variant::new("12 oz", dec!(0.8)),
                Variant::new("16 oz", dec!(1.5)),
            ],
            vec![AddOn::new("Oat Milk", dec!(0.5)), AddOn::new("Extra Shot", dec!(0.8))],
        ),
        product(
            "Cold Brew",
            "Slow-steeped, smooth and bold.",
            dec!(3.5),
            "coffee",
            Image::new("https://images.pexels.com/photos/312418/pexels-photo-312418.jpeg", "Coffee professional"),
            "07:00-20:00",
            vec![Variant::new("12 oz", dec!(0.0)), Variant::new("16 oz", dec!(1.0))],
            vec![AddOn::new("Vanilla Syrup", dec!(0.4)), AddOn::new("Caramel Syrup", dec!(0.4))],
        ),
    ]
}

pub fn demo_coupons() -> Vec<CouponCreate> {
    vec![
        CouponCreate::new("URBAN10", DiscountType::Percent, dec!(10.0), dec!(15.0)),
        CouponCreate::new("WELCOME5", DiscountType::Fixed, dec!(5.0), dec!(20.0)),
    ]
}

pub fn demo_settings() -> Settings {
    Settings {
        brand: Brand::default(),
        tax_rate: dec!(0.08),
        currency: "USD".to_string(),
        payments_enabled: false,
        restaurant_hours: BTreeMap::from([("mon_sun".to_string(), "07:00-22:00".to_string())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductFilter;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let system = StorefrontSystem::new(16);

        assert!(seed_demo_data(&system).await.unwrap());
        assert!(!seed_demo_data(&system).await.unwrap());

        let products = system.product_client.list_products(ProductFilter::default()).await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(system.coupon_client.all_coupons().await.unwrap().len(), 2);
        assert_eq!(system.settings_client.tax_rate().await.unwrap(), dec!(0.08));

        let slugs: Vec<String> = system
            .product_client
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, vec!["burgers", "coffee"]);

        system.shutdown().await.unwrap();
    }
}
