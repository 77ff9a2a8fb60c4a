//! TrademarkDesk Core Domain Engine
//!
//! This crate provides the domain logic behind the registration flow:
//! the step controller, price derivation, trademark availability
//! checking, and the mock dashboard records.

pub mod availability;
pub mod onboarding;
pub mod pricing;
pub mod records;
pub mod wizard;

use thiserror::Error;

pub use availability::{AvailabilityChecker, AvailabilityReport, MockRegistry};
pub use onboarding::{ApplicantType, BusinessNature, OnboardingAnswers, TrademarkClass};
pub use pricing::{Addon, AddonId, OrderSummary, PackageOffer, PackageTier, Quote};
pub use records::{Application, ApplicationStatus, Notification, NotificationKind};
pub use wizard::{RegistrationFlow, RegistrationState, RegistrationStep};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("trademark name must not be empty")]
    EmptyName,

    #[error("registry check failed: {0}")]
    Registry(String),

    #[error("invalid promo code: {0}")]
    InvalidPromo(String),

    #[error("operation belongs to step {expected}, flow is at {actual}")]
    WrongStep {
        expected: RegistrationStep,
        actual: RegistrationStep,
    },
}

#[cfg(feature = "registry")]
impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        CoreError::Registry(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
