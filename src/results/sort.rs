use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Part;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Server order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Name,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Name => "Name A-Z",
        }
    }

    fn compare(self, a: &Part, b: &Part) -> Ordering {
        match self {
            Self::Relevance => Ordering::Equal,
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
            Self::Rating => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
            Self::Name => compare_names(&a.name, &b.name),
        }
    }

    /// Stable sort in place; ties keep their incoming order.
    pub fn sort(self, parts: &mut [Part]) {
        if self == Self::Relevance {
            return;
        }
        parts.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive first, then bytewise so the order is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(SortKey::as_str).collect();
                format!("unknown sort key '{s}' (expected one of: {})", valid.join(", "))
            })
    }
}
