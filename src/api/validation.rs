use axum::extract::rejection::JsonRejection;

use super::ApiError;

pub fn validate_user_id(raw: &str) -> Result<i32, ApiError> {
    let id: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::invalid_user_id(raw))?;

    if id <= 0 {
        return Err(ApiError::invalid_user_id(id));
    }
    Ok(id)
}

pub fn validate_search_body(rejection: &JsonRejection) -> ApiError {
    ApiError::validation(format!("Invalid search request: {}", rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id() {
        assert_eq!(validate_user_id("1").unwrap(), 1);
        assert_eq!(validate_user_id(" 42 ").unwrap(), 42);
        assert!(validate_user_id("0").is_err());
        assert!(validate_user_id("-3").is_err());
        assert!(validate_user_id("abc").is_err());
        assert!(validate_user_id("").is_err());
    }

    #[test]
    fn test_validation_message() {
        let err = validate_user_id("abc").unwrap_err();
        assert!(err.to_string().contains("Invalid user ID: abc"));
    }

    #[test]
    fn test_service_rejection_matches_handler_message() {
        let from_handler = validate_user_id("0").unwrap_err();
        let from_service = ApiError::history(crate::services::HistoryError::InvalidUser(0));
        assert_eq!(from_service.to_string(), from_handler.to_string());
    }
}
