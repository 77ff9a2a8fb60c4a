//! Price derivation and order math
//!
//! A [`Quote`] is derived from the onboarding answers; package tiers are
//! fixed multipliers over the base price. Payment totals add the chosen
//! add-on services and 18% GST on the subtotal.

use crate::onboarding::OnboardingAnswers;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration package tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageTier {
    Basic,
    Standard,
    Premium,
}

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [
        PackageTier::Basic,
        PackageTier::Standard,
        PackageTier::Premium,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PackageTier::Basic => "Basic",
            PackageTier::Standard => "Standard",
            PackageTier::Premium => "Premium",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PackageTier::Basic => "Essential trademark registration services",
            PackageTier::Standard => "Comprehensive registration with support",
            PackageTier::Premium => "Complete protection with priority handling",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            PackageTier::Basic => &[
                "Trademark Search Report",
                "Application Filing",
                "Government Fee for 1 Class",
                "Basic Documentation",
                "Email Support",
            ],
            PackageTier::Standard => &[
                "Everything in Basic",
                "Response to Examination Report",
                "Certificate Delivery",
                "Documentation Support",
                "Phone & Email Support",
            ],
            PackageTier::Premium => &[
                "Everything in Standard",
                "Priority Processing",
                "Multi-class Filing Support",
                "Dedicated Legal Expert",
                "1 Year of Post-Registration Support",
            ],
        }
    }

    /// Estimated time to registration, unchanged across tiers.
    pub fn duration(&self) -> &'static str {
        "18-24 months"
    }

    pub fn recommended(&self) -> bool {
        matches!(self, PackageTier::Standard)
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier prices derived from one set of onboarding answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub basic: u32,
    pub standard: u32,
    pub premium: u32,
}

impl Quote {
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        let basic = answers.base_price();
        Self {
            basic,
            standard: (basic as f64 * 1.6).round() as u32,
            premium: (basic as f64 * 2.5).round() as u32,
        }
    }

    pub fn price_for(&self, tier: PackageTier) -> u32 {
        match tier {
            PackageTier::Basic => self.basic,
            PackageTier::Standard => self.standard,
            PackageTier::Premium => self.premium,
        }
    }

    /// The three package cards priced from this quote.
    pub fn packages(&self) -> Vec<PackageOffer> {
        PackageTier::ALL
            .iter()
            .map(|&tier| PackageOffer {
                tier,
                name: tier.name(),
                price: self.price_for(tier),
                description: tier.description(),
                features: tier.features(),
                duration: tier.duration(),
                recommended: tier.recommended(),
            })
            .collect()
    }
}

/// A priced package card. Outbound only; requests carry answers and a
/// tier instead.
#[derive(Debug, Clone, Serialize)]
pub struct PackageOffer {
    pub tier: PackageTier,
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub duration: &'static str,
    pub recommended: bool,
}

/// Add-on services offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonId {
    Gst,
    Fssai,
    Legal,
}

impl AddonId {
    pub const ALL: [AddonId; 3] = [AddonId::Gst, AddonId::Fssai, AddonId::Legal];

    pub fn details(&self) -> Addon {
        match self {
            AddonId::Gst => Addon {
                id: *self,
                name: "GST Registration",
                price: 1499,
                description: "Complete GST registration service",
            },
            AddonId::Fssai => Addon {
                id: *self,
                name: "FSSAI Registration",
                price: 3499,
                description: "Food safety license for your business",
            },
            AddonId::Legal => Addon {
                id: *self,
                name: "Legal Documentation",
                price: 2999,
                description: "Custom legal documents for your business",
            },
        }
    }

    pub fn price(&self) -> u32 {
        self.details().price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Addon {
    pub id: AddonId,
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
}

/// The full add-on catalog, in display order.
pub fn addon_catalog() -> Vec<Addon> {
    AddonId::ALL.iter().map(|a| a.details()).collect()
}

/// GST rate applied to the order subtotal.
const GST_RATE: f64 = 0.18;

/// Checkout totals for a selected package plus add-ons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub package: PackageTier,
    pub package_price: u32,
    pub addons: Vec<AddonId>,
    pub subtotal: u32,
    pub gst: u32,
    pub total: u32,
    /// Nominal discount from a promo code. Advisory only; totals are not
    /// reduced (the promo flow in the product never applied it either).
    pub discount_percent: Option<u8>,
}

impl OrderSummary {
    pub fn compute(
        quote: &Quote,
        package: PackageTier,
        addons: &[AddonId],
        promo_code: Option<&str>,
    ) -> CoreResult<Self> {
        let discount_percent = match promo_code {
            Some(code) => Some(validate_promo(code)?),
            None => None,
        };

        let package_price = quote.price_for(package);
        let subtotal = package_price + addons.iter().map(|a| a.price()).sum::<u32>();
        let gst = (subtotal as f64 * GST_RATE).round() as u32;

        Ok(Self {
            package,
            package_price,
            addons: addons.to_vec(),
            subtotal,
            gst,
            total: subtotal + gst,
            discount_percent,
        })
    }
}

/// Validate a promo code, returning the discount percentage it carries.
pub fn validate_promo(code: &str) -> CoreResult<u8> {
    if code.trim().eq_ignore_ascii_case("first10") {
        Ok(10)
    } else {
        Err(CoreError::InvalidPromo(code.to_string()))
    }
}

/// Format a rupee amount with Indian digit grouping (12,34,567).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut idx = head_bytes.len();
    while idx > 2 {
        groups.push(&head[idx - 2..idx]);
        idx -= 2;
    }
    groups.push(&head[..idx]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{ApplicantType, BusinessNature, TrademarkClass};

    fn all_answer_combinations() -> Vec<OnboardingAnswers> {
        let mut combos = Vec::new();
        for &applicant_type in &ApplicantType::ALL {
            for &business_nature in &BusinessNature::ALL {
                for &trademark_class in &TrademarkClass::ALL {
                    for includes_logo in [false, true] {
                        combos.push(OnboardingAnswers {
                            applicant_type,
                            business_nature,
                            trademark_class,
                            includes_logo,
                        });
                    }
                }
            }
        }
        combos
    }

    #[test]
    fn test_tier_multipliers_hold_for_all_answers() {
        for answers in all_answer_combinations() {
            let quote = Quote::from_answers(&answers);
            assert_eq!(quote.basic, answers.base_price());
            assert_eq!(quote.standard, (quote.basic as f64 * 1.6).round() as u32);
            assert_eq!(quote.premium, (quote.basic as f64 * 2.5).round() as u32);
        }
    }

    #[test]
    fn test_company_both_logo_quote() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Company,
            business_nature: BusinessNature::Both,
            trademark_class: TrademarkClass::Advertising,
            includes_logo: true,
        };
        let quote = Quote::from_answers(&answers);
        assert_eq!(quote.basic, 12499);
        assert_eq!(quote.standard, 19998);
        assert_eq!(quote.premium, 31248);
    }

    #[test]
    fn test_gst_on_bare_basic_package() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Individual,
            business_nature: BusinessNature::Services,
            trademark_class: TrademarkClass::Clothing,
            includes_logo: false,
        };
        let quote = Quote::from_answers(&answers);
        let order = OrderSummary::compute(&quote, PackageTier::Basic, &[], None).unwrap();
        assert_eq!(order.subtotal, 7999);
        assert_eq!(order.gst, 1440);
        assert_eq!(order.total, 9439);
    }

    #[test]
    fn test_addons_feed_subtotal() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Individual,
            business_nature: BusinessNature::Products,
            trademark_class: TrademarkClass::Food,
            includes_logo: false,
        };
        let quote = Quote::from_answers(&answers);
        let order = OrderSummary::compute(
            &quote,
            PackageTier::Basic,
            &[AddonId::Gst, AddonId::Legal],
            None,
        )
        .unwrap();
        assert_eq!(order.subtotal, 7999 + 1499 + 2999);
        assert_eq!(order.gst, (order.subtotal as f64 * 0.18).round() as u32);
        assert_eq!(order.total, order.subtotal + order.gst);
    }

    #[test]
    fn test_promo_validation() {
        assert_eq!(validate_promo("first10").unwrap(), 10);
        assert_eq!(validate_promo("  FIRST10 ").unwrap(), 10);
        assert!(matches!(
            validate_promo("second20"),
            Err(CoreError::InvalidPromo(_))
        ));
    }

    #[test]
    fn test_promo_does_not_change_totals() {
        let answers = OnboardingAnswers {
            applicant_type: ApplicantType::Individual,
            business_nature: BusinessNature::Products,
            trademark_class: TrademarkClass::Food,
            includes_logo: false,
        };
        let quote = Quote::from_answers(&answers);
        let plain = OrderSummary::compute(&quote, PackageTier::Basic, &[], None).unwrap();
        let promoted =
            OrderSummary::compute(&quote, PackageTier::Basic, &[], Some("first10")).unwrap();
        assert_eq!(promoted.total, plain.total);
        assert_eq!(promoted.discount_percent, Some(10));
    }

    #[test]
    fn test_standard_is_recommended() {
        let offers = Quote {
            basic: 7999,
            standard: 12798,
            premium: 19998,
        }
        .packages();
        let recommended: Vec<_> = offers.iter().filter(|o| o.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].tier, PackageTier::Standard);
    }

    #[test]
    fn test_package_offer_wire_shape() {
        let offers = Quote {
            basic: 7999,
            standard: 12798,
            premium: 19998,
        }
        .packages();
        let json = serde_json::to_value(&offers[1]).unwrap();
        assert_eq!(json["tier"], "standard");
        assert_eq!(json["price"], 12798);
        assert_eq!(json["features"].as_array().unwrap().len(), 5);
        assert_eq!(json["recommended"], true);
    }

    #[test]
    fn test_inr_formatting() {
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(7999), "7,999");
        assert_eq!(format_inr(12499), "12,499");
        assert_eq!(format_inr(123456), "1,23,456");
        assert_eq!(format_inr(12345678), "1,23,45,678");
    }
}
