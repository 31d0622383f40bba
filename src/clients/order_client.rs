use rust_decimal::Decimal;
use tracing::{error, info, instrument, warn};
use crate::domain::{
    FulfillmentType, Order, OrderCreate, OrderCreateRequest, OrderReceipt, OrderStatus, PaymentStatus,
};
use crate::coupon_actor::CouponError;
use crate::order_actor::{OrderAction, OrderError};
use crate::actor_framework::ResourceClient;
use crate::clients::{CouponClient, ProductClient, SettingsClient};
use crate::pricing::{self, build_order_item, compute_totals};

/// Client for interacting with the Order actor.
///
/// This client handles the checkout orchestration: it reads the tax rate,
/// prices every line against the catalog, applies a coupon when one is
/// given, and persists the resulting snapshot.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
    coupon_client: CouponClient,
    settings_client: SettingsClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        product_client: ProductClient,
        coupon_client: CouponClient,
        settings_client: SettingsClient,
    ) -> Self {
        Self {
            inner,
            product_client,
            coupon_client,
            settings_client,
        }
    }

    #[instrument(skip(self, request), fields(item_count = request.items.len(), fulfillment = ?request.fulfillment_type))]
    pub async fn create_order(&self, request: OrderCreateRequest) -> Result<OrderReceipt, OrderError> {
        info!("Processing create_order request");

        // Step 1: Reject malformed checkouts before touching any store
        validate_request(&request)?;

        // Step 2: Tax rate
        let tax_rate = self
            .settings_client
            .tax_rate()
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        // Step 3: Price every line; one unknown product aborts the order
        let mut items = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let product = match self.product_client.get_product(line.product_id.clone()).await {
                Ok(Some(product)) => product,
                Ok(None) => {
                    error!(product_id = %line.product_id, "Product not found");
                    return Err(OrderError::ProductNotFound(line.product_id.clone()));
                }
                Err(e) => {
                    error!(error = %e, "Product lookup failed");
                    return Err(OrderError::ActorCommunicationError(e.to_string()));
                }
            };
            items.push(build_order_item(&product, line));
        }
        let subtotal = pricing::subtotal(&items);

        // Step 4: Coupon, best effort
        let coupon = match request.coupon_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => self
                .coupon_client
                .try_apply_coupon(code, subtotal)
                .await
                .map_err(|e| match e {
                    CouponError::ValidationError(reason) => OrderError::ValidationError(reason),
                    other => OrderError::ActorCommunicationError(other.to_string()),
                })?,
            _ => None,
        };
        let discount_amount = coupon.as_ref().map_or(Decimal::ZERO, |c| c.discount_amount);

        // Step 5: Totals
        let totals = compute_totals(subtotal, discount_amount, tax_rate, request.tip_amount)
            .ok_or_else(|| OrderError::ValidationError("Order total is out of range".to_string()))?;
        info!(subtotal = %totals.subtotal, discount = %totals.discount_amount, total = %totals.total, "Order priced");

        // Step 6: Persist the snapshot
        let params = OrderCreate {
            user_info: request.user,
            fulfillment_type: request.fulfillment_type,
            delivery_address: request.delivery_address,
            pickup_location: request.pickup_location,
            items,
            totals,
            coupon,
        };
        let order_id = self.inner.create(params).await?;
        info!(order_id = %order_id, "Order created successfully");

        Ok(OrderReceipt {
            order_id,
            order_status: OrderStatus::default(),
            payment_status: PaymentStatus::default(),
            totals,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Order, OrderError> {
        match self.inner.get(id.clone()).await? {
            Some(order) => Ok(order),
            None => {
                warn!("Order not found");
                Err(OrderError::NotFound(id))
            }
        }
    }

    /// Moves an order to its next kitchen status.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn advance_order_status(&self, id: String) -> Result<OrderStatus, OrderError> {
        let status = self.inner.perform_action(id, OrderAction::AdvanceStatus).await?;
        info!(status = ?status, "Order status advanced");
        Ok(status)
    }
}

fn validate_request(request: &OrderCreateRequest) -> Result<(), OrderError> {
    if request.items.is_empty() {
        return Err(OrderError::ValidationError("Order must contain at least one item".to_string()));
    }
    if let Some(line) = request.items.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::ValidationError(format!(
            "Quantity must be at least 1 for product {}",
            line.product_id
        )));
    }
    if request.tip_amount < Decimal::ZERO {
        return Err(OrderError::ValidationError("Tip amount must not be negative".to_string()));
    }
    if request.fulfillment_type == FulfillmentType::Delivery && request.delivery_address.is_none() {
        return Err(OrderError::ValidationError("Delivery orders require a delivery address".to_string()));
    }
    Ok(())
}
