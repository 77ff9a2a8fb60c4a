//! Quote and order routes

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tm_core::pricing::PackageOffer;
use tm_core::{AddonId, CoreError, OnboardingAnswers, OrderSummary, PackageTier, Quote};
use tracing::warn;

#[derive(Serialize)]
pub struct QuoteResponse {
    pub quote: Quote,
    pub packages: Vec<PackageOffer>,
}

pub async fn quote(Json(answers): Json<OnboardingAnswers>) -> Json<QuoteResponse> {
    let quote = Quote::from_answers(&answers);
    Json(QuoteResponse {
        packages: quote.packages(),
        quote,
    })
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub answers: OnboardingAnswers,
    pub package: PackageTier,
    #[serde(default)]
    pub addons: Vec<AddonId>,
    pub promo_code: Option<String>,
}

pub async fn order(
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderSummary>, StatusCode> {
    let quote = Quote::from_answers(&request.answers);
    match OrderSummary::compute(
        &quote,
        request.package,
        &request.addons,
        request.promo_code.as_deref(),
    ) {
        Ok(summary) => Ok(Json(summary)),
        Err(CoreError::InvalidPromo(code)) => {
            warn!("rejected promo code {:?}", code);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err) => {
            warn!("order computation failed: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, AppConfig, AppState};
    use axum::body::Body;
    use axum::http::Request;
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

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn company_answers() -> serde_json::Value {
        serde_json::json!({
            "applicant_type": "company",
            "business_nature": "both",
            "trademark_class": "technology",
            "includes_logo": true
        })
    }

    #[tokio::test]
    async fn quote_prices_all_three_tiers() {
        let resp = test_app()
            .oneshot(post_json("/api/quote", company_answers()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["quote"]["basic"], 12499);
        assert_eq!(body["quote"]["standard"], 19998);
        assert_eq!(body["quote"]["premium"], 31248);
        assert_eq!(body["packages"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn order_totals_include_addons_and_gst() {
        let resp = test_app()
            .oneshot(post_json(
                "/api/order",
                serde_json::json!({
                    "answers": {
                        "applicant_type": "individual",
                        "business_nature": "products",
                        "trademark_class": "food",
                        "includes_logo": false
                    },
                    "package": "basic",
                    "addons": ["gst"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: OrderSummary = body_json(resp).await;
        assert_eq!(summary.subtotal, 7999 + 1499);
        assert_eq!(summary.gst, ((7999 + 1499) as f64 * 0.18).round() as u32);
        assert_eq!(summary.total, summary.subtotal + summary.gst);
    }

    #[tokio::test]
    async fn invalid_promo_is_rejected() {
        let resp = test_app()
            .oneshot(post_json(
                "/api/order",
                serde_json::json!({
                    "answers": {
                        "applicant_type": "startup",
                        "business_nature": "services",
                        "trademark_class": "clothing",
                        "includes_logo": false
                    },
                    "package": "standard",
                    "promo_code": "second20"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
