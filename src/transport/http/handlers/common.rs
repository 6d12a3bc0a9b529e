use crate::error::{ErrorKind, StoreError};
use crate::storage::ProductStore;
use crate::transport::http::types::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::task::JoinError;

/// Runs `op` against the store on the blocking pool, holding the store lock for
/// the whole call. Store operations do synchronous file I/O.
pub async fn with_store<T, F>(state: &AppState, op: F) -> Result<Result<T, StoreError>, JoinError>
where
    F: FnOnce(&mut ProductStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let mut store = state.store.clone().lock_owned().await;
    tokio::task::spawn_blocking(move || op(&mut *store)).await
}

pub fn join_error_response(err: &JoinError) -> Response {
    tracing::error!(error = %err, "store task failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(format!("store task failed: {}", err)),
    )
        .into_response()
}

/// Reads an integer from the start of `raw`, the way lenient query parsing does:
/// leading whitespace, an optional sign, then as many digits as are present.
/// `"2abc"` is 2; `"abc"` and `""` are `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Resolves a `limit` query value against the number of stored products.
/// Returns `None` when the whole list should be served.
pub fn effective_limit(raw: Option<&str>, total: usize) -> Option<usize> {
    let limit = parse_int_prefix(raw?)?;
    if limit <= 0 {
        return None;
    }
    let limit = usize::try_from(limit).ok()?;
    (limit <= total).then_some(limit)
}

pub fn status_for(err: &StoreError) -> StatusCode {
    match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error responses carry the message as a bare JSON string.
pub fn store_error_response(err: &StoreError) -> Response {
    (status_for(err), Json(err.to_string())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;

    #[test]
    fn parses_leading_digits_only() {
        assert_eq!(parse_int_prefix("2"), Some(2));
        assert_eq!(parse_int_prefix("  12abc"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+4"), Some(4));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("1.9"), Some(1));
    }

    #[test]
    fn limit_falls_back_to_everything() {
        assert_eq!(effective_limit(None, 3), None);
        assert_eq!(effective_limit(Some("x"), 3), None);
        assert_eq!(effective_limit(Some("0"), 3), None);
        assert_eq!(effective_limit(Some("-1"), 3), None);
        assert_eq!(effective_limit(Some("4"), 3), None);
        assert_eq!(effective_limit(Some("2"), 3), Some(2));
        assert_eq!(effective_limit(Some("3"), 3), Some(3));
    }

    #[test]
    fn store_errors_map_to_statuses() {
        let not_found = StoreError::NotFound { id: 1 };
        let invalid = StoreError::from(ValidationFailure::AlreadyExists {
            title: "P".to_string(),
        });
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let broken = StoreError::persistence("products.json", io);

        assert_eq!(status_for(&not_found), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&invalid), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&broken), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
