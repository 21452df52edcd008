use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origin of the local web front-end dev server.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Parse a comma-separated origin list, skipping blank entries.
pub fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {e}"),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

/// Origins from `CORS_ALLOWED_ORIGIN`, or [`DEFAULT_CORS_ORIGIN`] when unset.
pub fn cors_origins_from_env() -> io::Result<Vec<HeaderValue>> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into());
    parse_origins(&raw)
}

/// CORS layer for the listed origins.
///
/// Credentials are allowed, so origins are matched exactly (no wildcard).
/// Preflight results are cached for one hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://localhost:5173 , ,https://board.example.com").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:5173");
        assert_eq!(origins[1], "https://board.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_empty_list() {
        let err = parse_origins(" , ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_origins_default_to_local_frontend() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let origins = cors_origins_from_env().unwrap();
            assert_eq!(origins, vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)]);
        });
    }

    #[test]
    fn test_origins_read_from_env() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("https://a.example,https://b.example"), || {
            assert_eq!(cors_origins_from_env().unwrap().len(), 2);
        });
    }
}
