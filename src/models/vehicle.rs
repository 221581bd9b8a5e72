use chrono::Datelike;

use crate::constants::vehicles::{MAKES, MODELS, YEAR_SPAN};

#[must_use]
pub fn makes() -> Vec<String> {
    MAKES.iter().map(|m| (*m).to_string()).collect()
}

/// Models for a make, matched exactly. Unknown makes have no models.
#[must_use]
pub fn models_for(make: &str) -> Vec<String> {
    MODELS
        .iter()
        .find(|(name, _)| *name == make)
        .map(|(_, models)| models.iter().map(|m| (*m).to_string()).collect())
        .unwrap_or_default()
}

/// Selectable model years, newest first.
#[must_use]
pub fn model_years(current_year: i32) -> Vec<i32> {
    (0..YEAR_SPAN).map(|offset| current_year - offset).collect()
}

#[must_use]
pub fn current_model_years() -> Vec<i32> {
    model_years(chrono::Local::now().year())
}
