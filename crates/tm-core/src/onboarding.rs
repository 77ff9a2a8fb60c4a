//! Onboarding questionnaire model
//!
//! Four answers collected before package selection. Everything is a
//! closed enum so the pricing rules below never branch on free-form
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is filing the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantType {
    Individual,
    Startup,
    Company,
}

impl ApplicantType {
    pub const ALL: [ApplicantType; 3] = [
        ApplicantType::Individual,
        ApplicantType::Startup,
        ApplicantType::Company,
    ];

    /// Surcharge over the base filing price, in rupees.
    pub fn price_bonus(&self) -> u32 {
        match self {
            ApplicantType::Individual => 0,
            ApplicantType::Startup => 1000,
            ApplicantType::Company => 2000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicantType::Individual => "Individual",
            ApplicantType::Startup => "Startup",
            ApplicantType::Company => "Company",
        }
    }
}

impl fmt::Display for ApplicantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the business sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessNature {
    Products,
    Services,
    Both,
}

impl BusinessNature {
    pub const ALL: [BusinessNature; 3] = [
        BusinessNature::Products,
        BusinessNature::Services,
        BusinessNature::Both,
    ];

    pub fn price_bonus(&self) -> u32 {
        match self {
            BusinessNature::Both => 1500,
            _ => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessNature::Products => "Products",
            BusinessNature::Services => "Services",
            BusinessNature::Both => "Both Products & Services",
        }
    }
}

impl fmt::Display for BusinessNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The trademark classes the service files under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrademarkClass {
    Electronics,
    Advertising,
    Technology,
    Clothing,
    Food,
}

impl TrademarkClass {
    pub const ALL: [TrademarkClass; 5] = [
        TrademarkClass::Electronics,
        TrademarkClass::Advertising,
        TrademarkClass::Technology,
        TrademarkClass::Clothing,
        TrademarkClass::Food,
    ];

    /// Nice classification number.
    pub fn code(&self) -> u8 {
        match self {
            TrademarkClass::Electronics => 9,
            TrademarkClass::Advertising => 35,
            TrademarkClass::Technology => 42,
            TrademarkClass::Clothing => 25,
            TrademarkClass::Food => 30,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TrademarkClass::Electronics => "Electronic & Scientific Devices",
            TrademarkClass::Advertising => "Advertising & Business Services",
            TrademarkClass::Technology => "Scientific & Technology Services",
            TrademarkClass::Clothing => "Clothing & Apparel",
            TrademarkClass::Food => "Food & Beverages",
        }
    }
}

impl fmt::Display for TrademarkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {} - {}", self.code(), self.description())
    }
}

/// Completed questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    pub applicant_type: ApplicantType,
    pub business_nature: BusinessNature,
    pub trademark_class: TrademarkClass,
    pub includes_logo: bool,
}

impl OnboardingAnswers {
    /// Base registration price in rupees. The trademark class never
    /// affects the price; only one class is filed.
    pub fn base_price(&self) -> u32 {
        let mut price = 7999;
        price += self.applicant_type.price_bonus();
        price += self.business_nature.price_bonus();
        if self.includes_logo {
            price += 1000;
        }
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_price_floor() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Individual,
            business_nature: BusinessNature::Products,
            trademark_class: TrademarkClass::Food,
            includes_logo: false,
        };
        assert_eq!(answers.base_price(), 7999);
    }

    #[test]
    fn test_base_price_all_bonuses() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Company,
            business_nature: BusinessNature::Both,
            trademark_class: TrademarkClass::Technology,
            includes_logo: true,
        };
        assert_eq!(answers.base_price(), 7999 + 2000 + 1500 + 1000);
        assert_eq!(answers.base_price(), 12499);
    }

    #[test]
    fn test_class_codes() {
        let codes: Vec<u8> = TrademarkClass::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![9, 35, 42, 25, 30]);
    }

    #[test]
    fn test_class_display() {
        assert_eq!(
            TrademarkClass::Electronics.to_string(),
            "Class 9 - Electronic & Scientific Devices"
        );
    }

    #[test]
    fn test_answer_serde_tags() {
        let json = serde_json::to_string(&ApplicantType::Startup).unwrap();
        assert_eq!(json, "\"startup\"");
        let back: BusinessNature = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(back, BusinessNature::Both);
    }
}
