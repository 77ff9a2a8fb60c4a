//! Trademark availability checking
//!
//! The registry is an external collaborator behind the
//! [`AvailabilityChecker`] seam. [`MockRegistry`] is deterministic and
//! pure; [`RegistryClient`] posts to a real endpoint and treats every
//! transport or shape failure as a registry error, which callers degrade
//! to "unavailable".

use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of one availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub name: String,
    pub available: bool,
}

/// Seam to the trademark registry.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Check whether `name` is available for registration. The trimmed
    /// name must be non-empty; implementations reject empty input before
    /// touching any backend.
    async fn check(&self, name: &str) -> CoreResult<AvailabilityReport>;
}

/// Trim and reject empty names. Shared by every checker so validation
/// failures never reach the wire.
pub fn normalize_name(name: &str) -> CoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyName);
    }
    Ok(trimmed)
}

/// Deterministic stand-in for the registry: names containing "taken"
/// conflict, everything else is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRegistry;

impl MockRegistry {
    pub fn new() -> Self {
        Self
    }

    /// The pure decision rule, usable without an async context.
    pub fn evaluate(name: &str) -> CoreResult<AvailabilityReport> {
        let trimmed = normalize_name(name)?;
        let available = !trimmed.to_lowercase().contains("taken");
        Ok(AvailabilityReport {
            name: trimmed.to_string(),
            available,
        })
    }
}

#[async_trait]
impl AvailabilityChecker for MockRegistry {
    async fn check(&self, name: &str) -> CoreResult<AvailabilityReport> {
        Self::evaluate(name)
    }
}

#[cfg(feature = "registry")]
pub use client::RegistryClient;

#[cfg(feature = "registry")]
mod client {
    use super::*;

    #[derive(Serialize)]
    struct CheckRequest<'a> {
        company_name: &'a str,
        #[serde(rename = "async")]
        run_async: bool,
    }

    #[derive(Deserialize)]
    struct CheckResponse {
        #[serde(default)]
        available: bool,
    }

    /// HTTP client for the registry's check endpoint. No retries and no
    /// auth; the endpoint address comes from configuration.
    pub struct RegistryClient {
        url: String,
        http: reqwest::Client,
    }

    impl RegistryClient {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                http: reqwest::Client::new(),
            }
        }
    }

    #[async_trait]
    impl AvailabilityChecker for RegistryClient {
        async fn check(&self, name: &str) -> CoreResult<AvailabilityReport> {
            let trimmed = normalize_name(name)?;

            let response = self
                .http
                .post(&self.url)
                .json(&CheckRequest {
                    company_name: trimmed,
                    run_async: false,
                })
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(CoreError::Registry(format!(
                    "registry returned status {}",
                    response.status()
                )));
            }

            let body: CheckResponse = response.json().await?;
            Ok(AvailabilityReport {
                name: trimmed.to_string(),
                available: body.available,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected_before_any_call() {
        assert!(matches!(
            MockRegistry::evaluate(""),
            Err(CoreError::EmptyName)
        ));
        assert!(matches!(
            MockRegistry::evaluate("   "),
            Err(CoreError::EmptyName)
        ));
    }

    #[test]
    fn test_taken_names_conflict() {
        let report = MockRegistry::evaluate("TakenBrand").unwrap();
        assert!(!report.available);

        let report = MockRegistry::evaluate("almost-TAKEN-sounding").unwrap();
        assert!(!report.available);
    }

    #[test]
    fn test_other_names_available() {
        let report = MockRegistry::evaluate("  TechNova  ").unwrap();
        assert!(report.available);
        assert_eq!(report.name, "TechNova");
    }

    #[tokio::test]
    async fn test_mock_is_deterministic_through_the_trait() {
        let registry = MockRegistry::new();
        let first = registry.check("EcoFresh").await.unwrap();
        let second = registry.check("EcoFresh").await.unwrap();
        assert_eq!(first, second);
    }
}
