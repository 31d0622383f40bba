//! Pricing engine: unit prices from base price, variant and add-ons, line
//! totals, and the final totals breakdown of an order.
//!
//! Everything here is a pure function over a product snapshot and the
//! requested selections. Unknown variant or add-on ids are skipped rather
//! than rejected.

use rust_decimal::Decimal;

use crate::domain::{round_money, AddOn, OrderItem, OrderItemRequest, OrderTotals, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub unit_price: Decimal,
    pub variant_name: Option<String>,
    pub selected_add_ons: Vec<AddOn>,
}

pub fn price_line_item(product: &Product, variant_id: Option<&str>, add_on_ids: &[String]) -> PricedItem {
    let mut unit_price = product.base_price;
    let mut variant_name = None;

    if let Some(variant) = variant_id.and_then(|id| product.find_variant(id)) {
        unit_price += variant.price_delta;
        variant_name = Some(variant.name.clone());
    }

    let selected_add_ons: Vec<AddOn> = product
        .add_ons
        .iter()
        .filter(|a| add_on_ids.contains(&a.add_on_id))
        .cloned()
        .collect();
    unit_price += selected_add_ons.iter().map(|a| a.price_delta).sum::<Decimal>();

    PricedItem {
        unit_price: round_money(unit_price),
        variant_name,
        selected_add_ons,
    }
}

pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Prices one requested line against its product and freezes the result.
pub fn build_order_item(product: &Product, request: &OrderItemRequest) -> OrderItem {
    let priced = price_line_item(product, request.variant_id.as_deref(), &request.add_on_ids);
    OrderItem {
        product_id: product.product_id.clone(),
        product_name: product.name.clone(),
        variant_id: request.variant_id.clone(),
        variant_name: priced.variant_name,
        quantity: request.quantity,
        unit_price: priced.unit_price,
        add_on_ids: request.add_on_ids.clone(),
        add_ons: priced.selected_add_ons,
        line_total: line_total(priced.unit_price, request.quantity),
    }
}

/// Running sum of line totals, kept at cent precision after each line.
pub fn subtotal(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| round_money(acc + item.line_total))
}

/// Taxes the discounted subtotal and adds the tip.
///
/// The discount never pushes the taxable amount below zero. Returns `None`
/// when the total does not fit in a `Decimal`.
pub fn compute_totals(
    subtotal: Decimal,
    discount_amount: Decimal,
    tax_rate: Decimal,
    tip_amount: Decimal,
) -> Option<OrderTotals> {
    let taxable = subtotal.checked_sub(discount_amount)?.max(Decimal::ZERO);
    let tax_amount = round_money(taxable.checked_mul(tax_rate)?);
    let total = taxable.checked_add(tax_amount)?.checked_add(tip_amount)?;
    Some(OrderTotals {
        subtotal,
        discount_amount,
        tax_amount,
        tip_amount,
        total: round_money(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Variant;
    use rust_decimal_macros::dec;

    fn burger() -> Product {
        Product::new("p1", "Urban Classic Burger", dec!(8.99))
            .with_variants(vec![
                Variant { variant_id: "regular".into(), name: "Regular".into(), price_delta: dec!(0) },
                Variant { variant_id: "large".into(), name: "Large".into(), price_delta: dec!(2.00) },
                Variant { variant_id: "kids".into(), name: "Kids".into(), price_delta: dec!(-1.50) },
            ])
            .with_add_ons(vec![
                AddOn { add_on_id: "cheese".into(), name: "Extra Cheese".into(), price_delta: dec!(1.00) },
                AddOn { add_on_id: "bacon".into(), name: "Bacon".into(), price_delta: dec!(1.50) },
            ])
    }

    #[test]
    fn test_variant_and_add_on_compose_unit_price() {
        let request = OrderItemRequest::new("p1", 2).with_variant("large").with_add_ons(&["cheese"]);
        let item = build_order_item(&burger(), &request);

        assert_eq!(item.unit_price, dec!(11.99));
        assert_eq!(item.line_total, dec!(23.98));
        assert_eq!(item.variant_name.as_deref(), Some("Large"));
        assert_eq!(item.add_ons.len(), 1);
        assert_eq!(item.add_ons[0].name, "Extra Cheese");
        assert_eq!(item.product_name, "Urban Classic Burger");
    }

    #[test]
    fn test_unknown_selections_are_ignored() {
        let ids = vec!["cheese".to_string(), "truffle".to_string()];
        let priced = price_line_item(&burger(), Some("xxl"), &ids);

        assert_eq!(priced.unit_price, dec!(9.99));
        assert_eq!(priced.variant_name, None);
        assert_eq!(priced.selected_add_ons.len(), 1);
    }

    #[test]
    fn test_negative_variant_and_all_add_ons() {
        let ids = vec!["bacon".to_string(), "cheese".to_string()];
        let priced = price_line_item(&burger(), Some("kids"), &ids);

        // product order, not request order
        assert_eq!(priced.selected_add_ons[0].add_on_id, "cheese");
        assert_eq!(priced.unit_price, dec!(9.99));
    }

    #[test]
    fn test_base_price_only() {
        let priced = price_line_item(&burger(), None, &[]);
        assert_eq!(priced.unit_price, dec!(8.99));
        assert_eq!(line_total(priced.unit_price, 3), dec!(26.97));
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let product = burger();
        let items = vec![
            build_order_item(&product, &OrderItemRequest::new("p1", 2)),
            build_order_item(&product, &OrderItemRequest::new("p1", 1).with_variant("large")),
        ];
        assert_eq!(subtotal(&items), dec!(28.97));
        assert_eq!(subtotal(&[]), dec!(0));
    }

    #[test]
    fn test_totals_with_discount_tax_and_tip() {
        let totals = compute_totals(dec!(30.0), dec!(3.00), dec!(0.08), dec!(2.0)).unwrap();

        assert_eq!(totals.tax_amount, dec!(2.16));
        assert_eq!(totals.total, dec!(31.16));
        assert_eq!(totals.discount_amount, dec!(3.00));
    }

    #[test]
    fn test_totals_never_tax_a_negative_amount() {
        let totals = compute_totals(dec!(10), dec!(15), dec!(0.08), dec!(1.50)).unwrap();

        assert_eq!(totals.tax_amount, dec!(0));
        assert_eq!(totals.total, dec!(1.50));
    }

    #[test]
    fn test_totals_overflow_is_none() {
        assert_eq!(compute_totals(dec!(10), dec!(0), dec!(0.08), Decimal::MAX), None);
        assert!(compute_totals(dec!(10), dec!(0), dec!(0.08), dec!(1000000)).is_some());
    }

    #[test]
    fn test_totals_invariant_holds() {
        for (subtotal, discount, rate, tip) in [
            (dec!(23.98), dec!(2.40), dec!(0.08), dec!(0)),
            (dec!(47.33), dec!(5), dec!(0.0725), dec!(3.10)),
            (dec!(4.00), dec!(0), dec!(0.08), dec!(0.99)),
        ] {
            let totals = compute_totals(subtotal, discount, rate, tip).unwrap();
            let taxable = (subtotal - discount).max(Decimal::ZERO);
            assert_eq!(totals.tax_amount, round_money(taxable * rate));
            assert_eq!(totals.total, round_money(taxable + totals.tax_amount + tip));
        }
    }
}
