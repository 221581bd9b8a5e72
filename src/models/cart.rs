//! Client-held shopping cart.
//!
//! The cart lives only as long as the value that owns it; nothing is sent to
//! the server. Availability is not checked here.

use serde::{Deserialize, Serialize};

use super::part::Part;
use crate::constants::shipping::{FLAT_SURCHARGE, FREE_SHIPPING_THRESHOLD};

/// Rounds a dollar amount to whole cents.
#[allow(clippy::cast_possible_truncation)]
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    pub part_number: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_cents(&self) -> i64 {
        to_cents(self.price) * i64::from(self.quantity)
    }

    #[must_use]
    pub fn line_total(&self) -> f64 {
        from_cents(self.line_cents())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two sample rows a fresh cart drawer starts with.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            items: vec![
                CartItem {
                    id: 1,
                    name: "Brake Pads for 2020 Toyota Camry".to_string(),
                    part_number: "AP-BRK123456".to_string(),
                    price: 89.99,
                    quantity: 2,
                },
                CartItem {
                    id: 2,
                    name: "Oil Filter for 2020 Toyota Camry".to_string(),
                    part_number: "AP-OIL789012".to_string(),
                    price: 24.99,
                    quantity: 1,
                },
            ],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds `quantity` of a part, merging with an existing row of the same id.
    pub fn add_part(&mut self, part: &Part, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == part.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem {
            id: part.id,
            name: part.name.clone(),
            part_number: part.part_number.clone(),
            price: part.price,
            quantity,
        });
    }

    /// Sets the quantity of a row; zero or less removes it.
    pub fn update_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn increment(&mut self, id: u32) {
        if let Some(item) = self.get(id) {
            let next = i64::from(item.quantity) + 1;
            self.update_quantity(id, next);
        }
    }

    pub fn decrement(&mut self, id: u32) {
        if let Some(item) = self.get(id) {
            let next = i64::from(item.quantity) - 1;
            self.update_quantity(id, next);
        }
    }

    pub fn remove(&mut self, id: u32) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Money is summed in whole cents so the shipping threshold compares exactly.
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(CartItem::line_cents).sum()
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        from_cents(self.subtotal_cents())
    }

    #[must_use]
    pub fn shipping(&self) -> f64 {
        from_cents(shipping_cents(self.subtotal_cents()))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        let subtotal = self.subtotal_cents();
        from_cents(subtotal + shipping_cents(subtotal))
    }
}

fn shipping_cents(subtotal_cents: i64) -> i64 {
    if subtotal_cents > to_cents(FREE_SHIPPING_THRESHOLD) {
        0
    } else {
        to_cents(FLAT_SURCHARGE)
    }
}

/// Free strictly above the threshold; a subtotal of exactly 100 still pays.
#[must_use]
pub fn shipping_for(subtotal: f64) -> f64 {
    from_cents(shipping_cents(to_cents(subtotal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::Availability;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn part(id: u32, price: f64) -> Part {
        Part {
            id,
            name: format!("Part {id}"),
            part_number: format!("AP-{id:09}"),
            price,
            original_price: None,
            brand: "Gates".to_string(),
            availability: Availability::OutOfStock,
            description: String::new(),
            full_description: String::new(),
            rating: Some(4.0),
            review_count: 12,
            is_oem: false,
            warranty: None,
            weight: "1.0".to_string(),
            dimensions: String::new(),
            category: "Interior".to_string(),
            compatibility: String::new(),
            engine_types: vec![],
            features: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_demo_cart_totals() {
        let cart = Cart::demo();
        assert_eq!(cart.item_count(), 3);
        assert!(approx(cart.subtotal(), 89.99 * 2.0 + 24.99));
        assert!(approx(cart.shipping(), 0.0));
        assert!(approx(cart.total(), cart.subtotal()));
    }

    #[test]
    fn test_subtotal_is_sum_of_lines() {
        let mut cart = Cart::new();
        cart.add_part(&part(1, 12.5), 3);
        cart.add_part(&part(2, 40.0), 1);
        cart.add_part(&part(1, 12.5), 1);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.get(1).unwrap().quantity, 4);
        assert!(approx(cart.subtotal(), 12.5 * 4.0 + 40.0));
    }

    #[test]
    fn test_out_of_stock_still_addable() {
        let mut cart = Cart::new();
        cart.add_part(&part(5, 30.0), 1);
        assert!(cart.get(5).is_some());
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let mut cart = Cart::demo();
        cart.decrement(2);
        assert!(cart.get(2).is_none());

        cart.decrement(1);
        assert_eq!(cart.get(1).unwrap().quantity, 1);
        cart.decrement(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::demo();
        cart.update_quantity(1, 5);
        assert_eq!(cart.get(1).unwrap().quantity, 5);

        cart.update_quantity(1, -3);
        assert!(cart.get(1).is_none());

        // unknown ids are ignored
        cart.update_quantity(99, 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_empty_cart_pays_surcharge() {
        let mut cart = Cart::demo();
        cart.clear();
        assert!(approx(cart.subtotal(), 0.0));
        assert!(approx(cart.shipping(), FLAT_SURCHARGE));
        assert!(approx(cart.total(), FLAT_SURCHARGE));
    }

    #[test]
    fn test_shipping_boundary() {
        assert!(approx(shipping_for(100.0), FLAT_SURCHARGE));
        assert!(approx(shipping_for(100.01), 0.0));
        assert!(approx(shipping_for(99.99), FLAT_SURCHARGE));

        let mut cart = Cart::new();
        cart.add_part(&part(1, 50.0), 2);
        assert!(approx(cart.shipping(), FLAT_SURCHARGE));
        cart.increment(1);
        assert!(approx(cart.shipping(), 0.0));
    }

    #[test]
    fn test_cent_prices_summing_to_threshold_pay_surcharge() {
        let mut cart = Cart::new();
        cart.add_part(&part(1, 0.01), 1);
        cart.add_part(&part(2, 65.40), 1);
        cart.add_part(&part(3, 34.59), 1);

        assert_eq!(cart.subtotal_cents(), 10_000);
        assert_eq!(cart.subtotal(), 100.0);
        assert_eq!(cart.shipping(), FLAT_SURCHARGE);
        assert_eq!(cart.total(), 109.99);

        cart.add_part(&part(1, 0.01), 1);
        assert_eq!(cart.shipping(), 0.0);
        assert_eq!(cart.total(), 100.01);
    }

    #[test]
    fn test_remove_returns_item() {
        let mut cart = Cart::demo();
        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.part_number, "AP-BRK123456");
        assert!(cart.remove(1).is_none());
    }
}
