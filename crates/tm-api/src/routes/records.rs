//! Dashboard record routes
//!
//! These serve the mock fixtures; there is no store behind them.

use axum::Json;
use tm_core::records::{self, Application, Notification};

pub async fn list_applications() -> Json<Vec<Application>> {
    Json(records::sample_applications())
}

pub async fn list_notifications() -> Json<Vec<Notification>> {
    Json(records::sample_notifications())
}

#[cfg(test)]
mod tests {
    use crate::{app, AppConfig, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
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

    #[tokio::test]
    async fn applications_list_is_the_fixture_set() {
        let req = Request::builder()
            .method("GET")
            .uri("/api/applications")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let apps: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let apps = apps.as_array().unwrap();
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0]["name"], "TechNova");
        assert_eq!(apps[0]["status"], "pending");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
