use tracing::{info, error, instrument};
use crate::clients::{CouponClient, OrderClient, ProductClient, SettingsClient};
use crate::actor_framework::ResourceActor;
use crate::coupon_actor::coupon_key;
use crate::domain::{Coupon, Order, Product, Settings};
use crate::order_actor::next_order_id;
use crate::product_actor::next_product_id;
use crate::settings_actor::settings_key;

/// The storefront backend: every store actor plus the clients wired over them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
/// There is no process-wide store handle; whoever needs a store gets a client
/// from here.
pub struct StorefrontSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub coupon_client: CouponClient,
    pub settings_client: SettingsClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts the catalog, coupon and settings stores first, then the order
    /// store with clients for the other three.
    #[instrument(name = "storefront_system")]
    pub fn new(buffer_size: usize) -> Self {
        info!("Starting storefront system");

        // 1. Catalog
        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(buffer_size, next_product_id);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Coupons, keyed by normalized code
        let (coupon_actor, coupon_resource_client) = ResourceActor::<Coupon>::new(buffer_size, coupon_key);
        let coupon_client = CouponClient::new(coupon_resource_client);
        let coupon_handle = tokio::spawn(coupon_actor.run());

        // 3. Settings singleton
        let (settings_actor, settings_resource_client) = ResourceActor::<Settings>::new(buffer_size, settings_key);
        let settings_client = SettingsClient::new(settings_resource_client);
        let settings_handle = tokio::spawn(settings_actor.run());

        // 4. Orders, orchestrating the stores above
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer_size, next_order_id);
        let order_client = OrderClient::new(
            order_resource_client,
            product_client.clone(),
            coupon_client.clone(),
            settings_client.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        info!("Storefront system started");

        Self {
            order_client,
            product_client,
            coupon_client,
            settings_client,
            handles: vec![product_handle, coupon_handle, settings_handle, order_handle],
        }
    }

    /// Drops every client, which closes the actor mailboxes, then waits for
    /// the actor tasks to finish.
    ///
    /// Clones handed out elsewhere (e.g. to the HTTP router) must be dropped
    /// first or this waits for them.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system...");

        drop(self.order_client);
        drop(self.product_client);
        drop(self.coupon_client);
        drop(self.settings_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront system shutdown complete.");
        Ok(())
    }
}
