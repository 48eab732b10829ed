//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState, RootStatus};
use crate::health::{ComponentReport, ComponentState, HealthReport, HealthStatus, OperatingMode};

/// OpenAPI document for the service surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AnomalyYunsa API",
        description = "AI-powered fabric anomaly detection system"
    ),
    paths(handlers::root, handlers::health),
    components(schemas(
        RootStatus,
        HealthReport,
        ComponentReport,
        ComponentState,
        HealthStatus,
        OperatingMode
    ))
)]
struct ApiDoc;

/// Create the API router with the CORS policy attached.
///
/// The CORS layer answers preflight requests before any handler runs.
/// Future route groups (fabric data, detection, learning) mount here under
/// their own prefixes with state passed in explicitly.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_export))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::cors::cors_layer;
    use crate::health::HealthMonitor;
    use crate::server::ServiceMetadata;

    fn test_app() -> Router {
        let config = Config::default();
        let metadata = ServiceMetadata::from_crate();
        let monitor = HealthMonitor::with_static_probes(config.mode, config.probe_timeout());
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(metadata, monitor, handle);
        create_router(state, cors_layer(&config).unwrap())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_returns_exact_liveness_body() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"service":"AnomalyYunsa API","status":"healthy","mode":"simulation","version":"0.1.0"}"#
        );
    }

    #[tokio::test]
    async fn health_returns_exact_report_body() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"status":"healthy","mode":"simulation","components":{"ml_engine":"ready","fabric_generator":"ready","websocket":"ready"}}"#
        );
    }

    #[tokio::test]
    async fn repeated_root_calls_are_byte_identical() {
        let app = test_app();

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(body_string(first).await, body_string(second).await);
    }

    #[tokio::test]
    async fn allowed_origin_is_echoed_with_credentials() {
        for origin in ["http://localhost:3000", "http://localhost:5173"] {
            let app = test_app();

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/")
                        .header(header::ORIGIN, origin)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .map(|v| v.to_str().unwrap()),
                Some(origin)
            );
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                    .map(|v| v.to_str().unwrap()),
                Some("true")
            );
        }
    }

    #[tokio::test]
    async fn foreign_origin_gets_no_cors_headers() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The request is still served; only the CORS headers are withheld.
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn preflight_is_answered_before_handlers() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("http://localhost:5173")
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .map(|v| v.to_str().unwrap()),
            Some("GET")
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/detection/jobs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_endpoint_renders_exposition() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
