use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AddOn, CouponValidation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentType {
    Pickup,
    Delivery,
}

/// Kitchen-side lifecycle: received → preparing → ready → completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }
}

/// Stays `Pending` while payments are disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

/// One priced entry of an order, frozen at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub variant_id: Option<String>,
    pub variant_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub add_on_ids: Vec<String>,
    pub add_ons: Vec<AddOn>,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub tip_amount: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub tip_amount: Decimal,
    pub total: Decimal,
    pub coupon: Option<CouponValidation>,
}

impl CartSnapshot {
    pub fn new(items: Vec<OrderItem>, totals: OrderTotals, coupon: Option<CouponValidation>) -> Self {
        Self {
            items,
            subtotal: totals.subtotal,
            discount_amount: totals.discount_amount,
            tax_amount: totals.tax_amount,
            tip_amount: totals.tip_amount,
            total: totals.total,
            coupon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Represents a customer order as persisted by the order store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_info: CustomerInfo,
    pub cart_snapshot: CartSnapshot,
    pub payment_status: PaymentStatus,
    pub fulfillment_type: FulfillmentType,
    pub delivery_address: Option<Address>,
    pub pickup_location: Option<String>,
    pub order_status: OrderStatus,
    pub totals: OrderTotals,
    pub timestamps: Timestamps,
}

/// Payload for persisting a priced order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_info: CustomerInfo,
    pub fulfillment_type: FulfillmentType,
    pub delivery_address: Option<Address>,
    pub pickup_location: Option<String>,
    pub items: Vec<OrderItem>,
    pub totals: OrderTotals,
    pub coupon: Option<CouponValidation>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub add_on_ids: Vec<String>,
}

fn default_quantity() -> u32 {
    1
}

#[cfg(test)]
impl OrderItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: None,
            quantity,
            add_on_ids: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant_id: impl Into<String>) -> Self {
        self.variant_id = Some(variant_id.into());
        self
    }

    pub fn with_add_ons(mut self, add_on_ids: &[&str]) -> Self {
        self.add_on_ids = add_on_ids.iter().map(|id| id.to_string()).collect();
        self
    }
}

/// Checkout request as submitted by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub items: Vec<OrderItemRequest>,
    pub user: CustomerInfo,
    pub fulfillment_type: FulfillmentType,
    #[serde(default)]
    pub delivery_address: Option<Address>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub tip_amount: Decimal,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

#[cfg(test)]
impl OrderCreateRequest {
    pub fn pickup(customer: impl Into<String>, items: Vec<OrderItemRequest>) -> Self {
        Self {
            items,
            user: CustomerInfo {
                name: customer.into(),
                email: None,
                phone: None,
            },
            fulfillment_type: FulfillmentType::Pickup,
            delivery_address: None,
            pickup_location: None,
            tip_amount: Decimal::ZERO,
            coupon_code: None,
        }
    }

    pub fn with_tip(mut self, tip_amount: Decimal) -> Self {
        self.tip_amount = tip_amount;
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }
}

/// What the caller gets back after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub totals: OrderTotals,
}
