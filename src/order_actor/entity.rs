use chrono::Utc;
use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::{CartSnapshot, Order, OrderCreate, OrderStatus, PaymentStatus, Timestamps};
use super::OrderAction;

/// Key generator for the order store.
pub fn next_order_id(_params: &OrderCreate) -> String {
    Uuid::new_v4().to_string()
}

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = (); // Snapshots are never edited in place
    type Action = OrderAction;
    type ActionResult = OrderStatus;

    /// Creates a new Order from a priced checkout.
    ///
    /// # Notes
    /// The order starts as `received` with payment `pending`; both timestamps
    /// are set to the current time.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        let now = Utc::now();
        Ok(Self {
            order_id: id,
            user_info: params.user_info,
            cart_snapshot: CartSnapshot::new(params.items, params.totals, params.coupon),
            payment_status: PaymentStatus::default(),
            fulfillment_type: params.fulfillment_type,
            delivery_address: params.delivery_address,
            pickup_location: params.pickup_location,
            order_status: OrderStatus::default(),
            totals: params.totals,
            timestamps: Timestamps {
                created_at: now,
                updated_at: now,
            },
        })
    }

    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `AdvanceStatus`: moves to the next status and refreshes `updated_at`
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, String> {
        match action {
            OrderAction::AdvanceStatus => {
                let next = self.order_status.next().ok_or_else(|| {
                    format!("Order {} is already completed", self.order_id)
                })?;
                self.order_status = next;
                self.timestamps.updated_at = Utc::now();
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerInfo, FulfillmentType, OrderTotals};
    use rust_decimal_macros::dec;

    fn create() -> OrderCreate {
        OrderCreate {
            user_info: CustomerInfo { name: "Ada".into(), email: None, phone: None },
            fulfillment_type: FulfillmentType::Pickup,
            delivery_address: None,
            pickup_location: Some("Main counter".into()),
            items: Vec::new(),
            totals: OrderTotals {
                subtotal: dec!(4.00),
                discount_amount: dec!(0),
                tax_amount: dec!(0.32),
                tip_amount: dec!(0),
                total: dec!(4.32),
            },
            coupon: None,
        }
    }

    #[test]
    fn test_new_order_starts_received_and_pending() {
        let order = Order::from_create_params("o1".into(), create()).unwrap();

        assert_eq!(order.order_status, OrderStatus::Received);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.timestamps.created_at, order.timestamps.updated_at);
        assert_eq!(order.cart_snapshot.total, order.totals.total);
        assert!(order.cart_snapshot.coupon.is_none());
    }

    #[test]
    fn test_status_lifecycle() {
        let mut order = Order::from_create_params("o1".into(), create()).unwrap();

        assert_eq!(order.handle_action(OrderAction::AdvanceStatus), Ok(OrderStatus::Preparing));
        assert_eq!(order.handle_action(OrderAction::AdvanceStatus), Ok(OrderStatus::Ready));
        assert_eq!(order.handle_action(OrderAction::AdvanceStatus), Ok(OrderStatus::Completed));
        assert!(order.handle_action(OrderAction::AdvanceStatus).is_err());
        assert_eq!(order.order_status, OrderStatus::Completed);
        assert!(order.timestamps.updated_at >= order.timestamps.created_at);
    }
}
