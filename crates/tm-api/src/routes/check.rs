//! Trademark availability route

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use tm_core::{AvailabilityReport, CoreError};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub company_name: String,
    /// Accepted for wire compatibility; only synchronous checks exist.
    #[serde(default, rename = "async")]
    pub run_async: bool,
}

pub async fn check_trademark(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<AvailabilityReport>, StatusCode> {
    match state.checker.check(&request.company_name).await {
        Ok(report) => Ok(Json(report)),
        Err(CoreError::EmptyName) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(err) => {
            warn!("trademark check failed: {}", err);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, AppConfig};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tm_core::MockRegistry;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        app(Arc::new(AppState {
            checker: Box::new(MockRegistry::new()),
            config: AppConfig {
                bind_addr: "127.0.0.1:0".to_string(),
                registry_url: None,
            },
        }))
    }

    fn check_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/check-trademark")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn available_name_round_trips() {
        let resp = test_app()
            .oneshot(check_request(
                r#"{"company_name": "TechNova", "async": false}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let report: AvailabilityReport = body_json(resp).await;
        assert_eq!(report.name, "TechNova");
        assert!(report.available);
    }

    #[tokio::test]
    async fn taken_name_reports_conflict() {
        let resp = test_app()
            .oneshot(check_request(r#"{"company_name": "TakenBrand"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let report: AvailabilityReport = body_json(resp).await;
        assert!(!report.available);
    }

    #[tokio::test]
    async fn empty_name_is_unprocessable() {
        let resp = test_app()
            .oneshot(check_request(r#"{"company_name": "   "}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
