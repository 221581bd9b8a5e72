//! Mock parts catalog.
//!
//! There is no real inventory behind the search endpoint: every call
//! fabricates a fresh list. With a configured seed the generator becomes a
//! stable fixture, where identical criteria always yield identical parts.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::config::CatalogConfig;
use crate::constants::catalog::{
    BRANDS, ENGINE_TYPES, FEATURES, INSTALL_NOTE, MAX_BASE_PRICE, MIN_BASE_PRICE, OEM_BRAND,
    PART_NUMBER_LEN, PART_NUMBER_PREFIX,
};
use crate::models::{Availability, Part, SearchRequest};

const PART_NUMBER_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub trait PartCatalog: Send + Sync {
    fn generate(&self, request: &SearchRequest) -> Vec<Part>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Inclusive bounds on the number of parts per response.
    pub min_results: usize,
    pub max_results: usize,
    pub seed: Option<u64>,
}

impl From<&CatalogConfig> for CatalogSettings {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            min_results: config.min_results,
            max_results: config.max_results,
            seed: config.seed,
        }
    }
}

pub struct RandomCatalog {
    settings: CatalogSettings,
}

impl RandomCatalog {
    #[must_use]
    pub fn new(settings: CatalogSettings) -> Self {
        let min_results = settings.min_results.max(1);
        Self {
            settings: CatalogSettings {
                min_results,
                max_results: settings.max_results.max(min_results),
                seed: settings.seed,
            },
        }
    }

    #[must_use]
    pub const fn settings(&self) -> CatalogSettings {
        self.settings
    }

    fn request_seed(seed: u64, request: &SearchRequest) -> u64 {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        request.make.hash(&mut hasher);
        request.model.hash(&mut hasher);
        request.year.hash(&mut hasher);
        request.category.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartCatalog for RandomCatalog {
    fn generate(&self, request: &SearchRequest) -> Vec<Part> {
        match self.settings.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(Self::request_seed(seed, request));
                generate_parts(&mut rng, &self.settings, request)
            }
            None => generate_parts(&mut rand::rng(), &self.settings, request),
        }
    }
}

/// Fields are drawn independently; nothing ties availability, price and
/// brand together beyond the OEM flag following the brand.
pub fn generate_parts<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &CatalogSettings,
    request: &SearchRequest,
) -> Vec<Part> {
    let count = rng.random_range(settings.min_results..=settings.max_results);
    (1..=count)
        .map(|index| generate_part(rng, u32::try_from(index).unwrap_or(u32::MAX), request))
        .collect()
}

fn generate_part<R: Rng + ?Sized>(rng: &mut R, id: u32, request: &SearchRequest) -> Part {
    let year = request.year_label();
    let vehicle = format!("{} {} {}", year, request.make, request.model);
    let category = request.category.as_str();
    let category_lower = category.to_lowercase();

    let brand = *BRANDS.choose(rng).unwrap_or(&OEM_BRAND);
    let price = rng.random_range(MIN_BASE_PRICE..=MAX_BASE_PRICE);
    let availability = *Availability::ALL
        .choose(rng)
        .unwrap_or(&Availability::InStock);

    let original_price = rng
        .random_bool(0.3)
        .then(|| f64::from(price + rng.random_range(0..50)));

    let engine_count = rng.random_range(1..=ENGINE_TYPES.len());
    let feature_count = rng.random_range(2..=5);

    Part {
        id,
        name: format!("{category} for {vehicle}"),
        part_number: part_number(rng),
        price: f64::from(price),
        original_price,
        brand: brand.to_string(),
        availability,
        description: format!("High-quality {category_lower} compatible with {vehicle}"),
        full_description: format!(
            "This {category_lower} is specifically designed for your {vehicle}. Manufactured by {brand}, it meets or exceeds OEM specifications and comes with a comprehensive warranty."
        ),
        rating: Some(f64::from(rng.random_range(4..=5_u8))),
        review_count: rng.random_range(10..=209),
        is_oem: brand == OEM_BRAND,
        warranty: Some(if rng.random_bool(0.5) { "2 Year" } else { "1 Year" }.to_string()),
        weight: format!("{:.1}", rng.random_range(0.5..10.5_f64)),
        dimensions: format!(
            "{:.1}\" x {:.1}\" x {:.1}\"",
            rng.random_range(5.0..15.0_f64),
            rng.random_range(3.0..11.0_f64),
            rng.random_range(2.0..8.0_f64)
        ),
        category: category.to_string(),
        compatibility: vehicle,
        engine_types: ENGINE_TYPES[..engine_count]
            .iter()
            .map(|e| (*e).to_string())
            .collect(),
        features: FEATURES[..feature_count]
            .iter()
            .map(|f| (*f).to_string())
            .collect(),
        notes: rng.random_bool(0.5).then(|| INSTALL_NOTE.to_string()),
    }
}

fn part_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..PART_NUMBER_LEN)
        .map(|_| {
            let idx = rng.random_range(0..PART_NUMBER_CHARSET.len());
            char::from(PART_NUMBER_CHARSET[idx])
        })
        .collect();
    format!("{PART_NUMBER_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::catalog::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_RESULTS};

    fn camry_brakes() -> SearchRequest {
        SearchRequest {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: Some(2020),
            category: "Brake System".to_string(),
            query: String::new(),
            user_id: None,
        }
    }

    fn default_settings(seed: Option<u64>) -> CatalogSettings {
        CatalogSettings {
            min_results: DEFAULT_MIN_RESULTS,
            max_results: DEFAULT_MAX_RESULTS,
            seed,
        }
    }

    #[test]
    fn test_generated_parts_match_vehicle() {
        let catalog = RandomCatalog::new(default_settings(None));
        for _ in 0..25 {
            let parts = catalog.generate(&camry_brakes());
            assert!((DEFAULT_MIN_RESULTS..=DEFAULT_MAX_RESULTS).contains(&parts.len()));

            for (i, part) in parts.iter().enumerate() {
                assert_eq!(part.id as usize, i + 1);
                for needle in ["Brake System", "2020", "Toyota", "Camry"] {
                    assert!(part.name.contains(needle), "{} missing {needle}", part.name);
                }
                assert_eq!(part.compatibility, "2020 Toyota Camry");
                assert!(part.description.contains("brake system"));
            }
        }
    }

    #[test]
    fn test_field_ranges() {
        let catalog = RandomCatalog::new(default_settings(None));
        for part in (0..40).flat_map(|_| catalog.generate(&camry_brakes())) {
            assert!((25.0..=424.0).contains(&part.price));
            assert_eq!(part.price.fract(), 0.0);
            if let Some(original) = part.original_price {
                assert!(original >= part.price && original < part.price + 50.0);
            }
            assert!(BRANDS.contains(&part.brand.as_str()));
            assert_eq!(part.is_oem, part.brand == "OEM");
            assert!(matches!(part.rating, Some(r) if r == 4.0 || r == 5.0));
            assert!((10..=209).contains(&part.review_count));
            assert!(matches!(part.warranty.as_deref(), Some("1 Year" | "2 Year")));
            assert!((1..=2).contains(&part.engine_types.len()));
            assert!((2..=5).contains(&part.features.len()));
            assert_eq!(part.features[0], FEATURES[0]);

            assert!(part.part_number.starts_with("AP-"));
            let suffix = &part.part_number[3..];
            assert_eq!(suffix.len(), 9);
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            );

            let weight: f64 = part.weight.parse().unwrap();
            assert!((0.5..=10.5).contains(&weight));
            assert_eq!(part.dimensions.matches("\" x ").count(), 2);
        }
    }

    #[test]
    fn test_seeded_catalog_is_stable() {
        let catalog = RandomCatalog::new(default_settings(Some(42)));
        let first = catalog.generate(&camry_brakes());
        let second = catalog.generate(&camry_brakes());
        assert_eq!(first, second);

        let mut other = camry_brakes();
        other.model = "Corolla".to_string();
        let third = catalog.generate(&other);
        assert!(third.iter().all(|p| p.name.contains("Corolla")));
    }

    #[test]
    fn test_fixed_count() {
        let catalog = RandomCatalog::new(CatalogSettings {
            min_results: 5,
            max_results: 5,
            seed: None,
        });
        assert_eq!(catalog.generate(&camry_brakes()).len(), 5);
    }

    #[test]
    fn test_settings_normalized() {
        let catalog = RandomCatalog::new(CatalogSettings {
            min_results: 0,
            max_results: 0,
            seed: None,
        });
        assert_eq!(catalog.settings().min_results, 1);
        assert_eq!(catalog.settings().max_results, 1);
    }

    #[test]
    fn test_missing_year_leaves_gap() {
        let catalog = RandomCatalog::new(default_settings(Some(1)));
        let mut request = camry_brakes();
        request.year = None;
        let parts = catalog.generate(&request);
        assert_eq!(parts[0].name, "Brake System for  Toyota Camry");
    }
}
