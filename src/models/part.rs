use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Limited Stock")]
    LimitedStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    pub const ALL: [Self; 3] = [Self::InStock, Self::LimitedStock, Self::OutOfStock];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LimitedStock => "Limited Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    #[must_use]
    pub const fn can_purchase(&self) -> bool {
        !matches!(self, Self::OutOfStock)
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "in stock" | "instock" => Some(Self::InStock),
            "limited stock" | "limited" => Some(Self::LimitedStock),
            "out of stock" | "outofstock" | "out" => Some(Self::OutOfStock),
            _ => None,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single listing returned by the search endpoint. Identifiers are only
/// meaningful inside the response that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: u32,
    pub name: String,
    pub part_number: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub brand: String,
    pub availability: Availability,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(rename = "isOEM", default)]
    pub is_oem: bool,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub compatibility: String,
    #[serde(default)]
    pub engine_types: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Part {
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    #[must_use]
    pub fn has_warranty(&self) -> bool {
        self.warranty.as_deref().is_some_and(|w| !w.trim().is_empty())
    }

    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.price > crate::constants::shipping::FREE_SHIPPING_THRESHOLD
    }

    #[must_use]
    pub fn discount(&self) -> Option<f64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }
}
