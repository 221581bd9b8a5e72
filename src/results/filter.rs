use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::results::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::models::{Availability, Part};

/// Filter panel state. Every criterion is ANDed; an empty set means "any".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartFilters {
    pub price_range: (f64, f64),
    pub brands: BTreeSet<String>,
    pub availability: Vec<Availability>,
    /// Zero disables the rating filter.
    pub min_rating: f64,
    pub oem_only: bool,
    pub warranty_only: bool,
    /// Proxy for free shipping: price above the free-shipping threshold.
    pub free_shipping_only: bool,
}

impl Default for PartFilters {
    fn default() -> Self {
        Self {
            price_range: (DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE),
            brands: BTreeSet::new(),
            availability: Vec::new(),
            min_rating: 0.0,
            oem_only: false,
            warranty_only: false,
            free_shipping_only: false,
        }
    }
}

impl PartFilters {
    #[must_use]
    pub fn matches(&self, part: &Part) -> bool {
        let (min, max) = self.price_range;

        if part.price < min || part.price > max {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&part.brand) {
            return false;
        }
        if !self.availability.is_empty() && !self.availability.contains(&part.availability) {
            return false;
        }
        if self.min_rating > 0.0 && part.rating_or_zero() < self.min_rating {
            return false;
        }
        if self.oem_only && !part.is_oem {
            return false;
        }
        if self.warranty_only && !part.has_warranty() {
            return false;
        }
        if self.free_shipping_only && !part.ships_free() {
            return false;
        }
        true
    }

    #[must_use]
    pub fn apply(&self, parts: &[Part]) -> Vec<Part> {
        parts.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Number of filter groups that differ from the cleared state.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let (min, max) = self.price_range;
        [
            !self.brands.is_empty(),
            !self.availability.is_empty(),
            self.min_rating > 0.0,
            self.oem_only,
            self.warranty_only,
            self.free_shipping_only,
            min > DEFAULT_MIN_PRICE || max < DEFAULT_MAX_PRICE,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    pub fn toggle_availability(&mut self, availability: Availability) {
        if let Some(index) = self.availability.iter().position(|a| *a == availability) {
            self.availability.remove(index);
        } else {
            self.availability.push(availability);
        }
    }
}
