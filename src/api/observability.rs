use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

const HISTORY_PREFIX: &str = "/api/search-history/";
const MODELS_PREFIX: &str = "/api/vehicles/models/";

/// The raw `{user_id}` segment of a search-history lookup.
fn history_user_id(path: &str) -> Option<&str> {
    path.strip_prefix(HISTORY_PREFIX)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// Collapses path parameters so each endpoint is a single metrics series.
fn route_template(path: &str) -> &str {
    if history_user_id(path).is_some() {
        "/api/search-history/{user_id}"
    } else if path
        .strip_prefix(MODELS_PREFIX)
        .is_some_and(|make| !make.is_empty() && !make.contains('/'))
    {
        "/api/vehicles/models/{make}"
    } else {
        path
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let uri = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<axum::extract::MatchedPath>()
        .map_or_else(|| route_template(&uri).to_string(), |mp| mp.as_str().to_string());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri,
        route = %route,
        user_id = tracing::field::Empty,
    );

    if let Some(user_id) = history_user_id(&uri) {
        span.record("user_id", user_id);
    }

    async move {
        let response = next.run(req).await;

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status().as_u16();

        let outcome = if status >= 500 {
            "error"
        } else if status >= 400 {
            "client_error"
        } else {
            "success"
        };

        let labels = [
            ("method", method),
            ("path", route),
            ("status", status.to_string()),
        ];

        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(start.elapsed().as_secs_f64());

        info!(
            event = "http_request_finished",
            duration_ms = duration_ms,
            status_code = status,
            user_agent = %user_agent,
            outcome = %outcome,
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_user_id() {
        assert_eq!(history_user_id("/api/search-history/7"), Some("7"));
        assert_eq!(history_user_id("/api/search-history/abc"), Some("abc"));
        assert_eq!(history_user_id("/api/search-history/"), None);
        assert_eq!(history_user_id("/api/search-history/1/extra"), None);
        assert_eq!(history_user_id("/api/parts/search"), None);
    }

    #[test]
    fn test_route_template() {
        assert_eq!(
            route_template("/api/search-history/42"),
            "/api/search-history/{user_id}"
        );
        assert_eq!(
            route_template("/api/vehicles/models/Toyota"),
            "/api/vehicles/models/{make}"
        );
        assert_eq!(route_template("/api/vehicles/makes"), "/api/vehicles/makes");
        assert_eq!(route_template("/api/health"), "/api/health");
    }
}
