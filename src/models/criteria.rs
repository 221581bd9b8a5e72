use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all vehicle information and select a part category (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid model year: {0}")]
    InvalidYear(String),
}

/// Raw form input as typed by the user. Nothing here has been checked yet.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub category: String,
    pub query: String,
}

impl SearchForm {
    /// Presence checks only; an unknown make or category is still accepted.
    pub fn validate(&self) -> Result<SearchCriteria, ValidationError> {
        let make = self.make.trim();
        let model = self.model.trim();
        let year = self.year.trim();
        let category = self.category.trim();

        let missing: Vec<&'static str> = [
            ("make", make),
            ("model", model),
            ("year", year),
            ("category", category),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let year = parse_year(year).ok_or_else(|| ValidationError::InvalidYear(year.to_string()))?;

        let query = self.query.trim();

        Ok(SearchCriteria {
            make: make.to_string(),
            model: model.to_string(),
            year,
            category: category.to_string(),
            query: (!query.is_empty()).then(|| query.to_string()),
        })
    }
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 {
        return None;
    }
    value.parse::<i32>().ok().filter(|y| *y > 0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchCriteria {
    #[must_use]
    pub fn vehicle_label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    #[must_use]
    pub fn into_request(self, user_id: Option<i32>) -> SearchRequest {
        SearchRequest {
            make: self.make,
            model: self.model,
            year: Some(self.year),
            category: self.category,
            query: self.query.unwrap_or_default(),
            user_id,
        }
    }
}

impl From<SearchCriteria> for SearchRequest {
    fn from(criteria: SearchCriteria) -> Self {
        criteria.into_request(None)
    }
}

/// Body of `POST /api/parts/search`.
///
/// Every field is optional on the wire; the server does not re-validate what
/// the form already checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

impl SearchRequest {
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    #[must_use]
    pub fn query_opt(&self) -> Option<&str> {
        let q = self.query.trim();
        (!q.is_empty()).then_some(q)
    }
}

/// Accepts `2020`, `"2020"`, `""` and `null`.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(i64),
        Text(String),
    }

    match Option::<YearRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(YearRepr::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("year out of range: {n}"))),
        Some(YearRepr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(YearRepr::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid year: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry_form() -> SearchForm {
        SearchForm {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            category: "Brake System".to_string(),
            query: String::new(),
        }
    }

    #[test]
    fn test_valid_form() {
        let criteria = camry_form().validate().unwrap();
        assert_eq!(criteria.year, 2020);
        assert_eq!(criteria.query, None);
        assert_eq!(criteria.vehicle_label(), "2020 Toyota Camry");
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let blanks: [fn(&mut SearchForm); 4] = [
            |f: &mut SearchForm| f.make.clear(),
            |f: &mut SearchForm| f.model = "   ".to_string(),
            |f: &mut SearchForm| f.year.clear(),
            |f: &mut SearchForm| f.category.clear(),
        ];

        for blank in blanks {
            let mut form = camry_form();
            blank(&mut form);
            assert!(matches!(
                form.validate(),
                Err(ValidationError::MissingFields(ref fields)) if fields.len() == 1
            ));
        }
    }

    #[test]
    fn test_all_missing_reported_together() {
        let err = SearchForm::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["make", "model", "year", "category"])
        );
    }

    #[test]
    fn test_bad_year() {
        let mut form = camry_form();
        form.year = "20x0".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::InvalidYear(_))));

        form.year = "99".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::InvalidYear(_))));
    }

    #[test]
    fn test_query_trimmed_and_kept() {
        let mut form = camry_form();
        form.query = "  ceramic pads ".to_string();
        let criteria = form.validate().unwrap();
        assert_eq!(criteria.query.as_deref(), Some("ceramic pads"));
    }

    #[test]
    fn test_request_wire_format() {
        let request = camry_form().validate().unwrap().into_request(Some(1));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["year"], 2020);
        assert_eq!(json["query"], "");
    }

    #[test]
    fn test_request_year_accepts_string_and_null() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"make":"Ford","year":"2015","category":"Interior"}"#).unwrap();
        assert_eq!(req.year, Some(2015));
        assert_eq!(req.user_id, None);

        let req: SearchRequest = serde_json::from_str(r#"{"year":null}"#).unwrap();
        assert_eq!(req.year, None);

        assert!(serde_json::from_str::<SearchRequest>(r#"{"year":"soon"}"#).is_err());
    }
}
