//! Cross-origin policy for the browser frontend.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::Config;
use crate::error::{Result, ServiceError};

/// Build the CORS layer from the configured policy.
///
/// Only the exact configured origins are echoed back; requests from any
/// other origin get no CORS headers. Credentialed requests cannot use the
/// wildcard, so methods and headers mirror the request instead.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let mut origins = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        let value = HeaderValue::from_str(origin)
            .map_err(|_| ServiceError::InvalidOrigin(origin.clone()))?;
        origins.push(value);
    }

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if config.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_policy() {
        let config = Config::default();
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn rejects_origin_with_invalid_header_bytes() {
        let config = Config {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            ..Config::default()
        };

        match cors_layer(&config) {
            Err(ServiceError::InvalidOrigin(origin)) => {
                assert!(origin.contains("bad"));
            }
            other => panic!("expected InvalidOrigin, got {:?}", other.map(|_| ())),
        }
    }
}
