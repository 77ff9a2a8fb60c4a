//! Registration wizard step controller
//!
//! [`RegistrationFlow`] owns the current step and the accumulated
//! [`RegistrationState`]. Each completion call merges its partial update
//! into the state and advances exactly one step; `back()` returns one
//! step. Advancing out of the checker is gated on the registry reporting
//! the name available. The dashboard step is terminal.
//!
//! Revisiting an earlier step and changing an answer does not invalidate
//! fields captured later; callers that allow it inherit the stale data.

use crate::availability::AvailabilityReport;
use crate::onboarding::OnboardingAnswers;
use crate::pricing::{AddonId, OrderSummary, PackageTier, Quote};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Checker,
    Onboarding,
    Packages,
    Payment,
    Dashboard,
}

impl RegistrationStep {
    pub fn title(&self) -> &'static str {
        match self {
            RegistrationStep::Checker => "Trademark Availability Check",
            RegistrationStep::Onboarding => "Trademark Registration",
            RegistrationStep::Packages => "Select Your Package",
            RegistrationStep::Payment => "Complete Your Payment",
            RegistrationStep::Dashboard => "Your Dashboard",
        }
    }

    fn previous(&self) -> Option<RegistrationStep> {
        match self {
            RegistrationStep::Checker => None,
            RegistrationStep::Onboarding => Some(RegistrationStep::Checker),
            RegistrationStep::Packages => Some(RegistrationStep::Onboarding),
            RegistrationStep::Payment => Some(RegistrationStep::Packages),
            // Terminal: payment is already settled, there is no way back.
            RegistrationStep::Dashboard => None,
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegistrationStep::Checker => "checker",
            RegistrationStep::Onboarding => "onboarding",
            RegistrationStep::Packages => "packages",
            RegistrationStep::Payment => "payment",
            RegistrationStep::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Everything collected across the wizard. Lives in memory for one
/// session only; a reload starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    pub name: String,
    pub available: bool,
    pub answers: Option<OnboardingAnswers>,
    pub selected_package: Option<PackageTier>,
    pub additional_services: Vec<AddonId>,
}

/// Step controller for one registration session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFlow {
    step: RegistrationStep,
    state: RegistrationState,
}

impl Default for RegistrationStep {
    fn default() -> Self {
        RegistrationStep::Checker
    }
}

impl RegistrationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    fn expect_step(&self, expected: RegistrationStep) -> CoreResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CoreError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Record a checker result. Advances to onboarding only when the
    /// name came back available; a conflict keeps the flow on the
    /// checker so the user can try another name.
    pub fn record_check(&mut self, report: AvailabilityReport) -> CoreResult<()> {
        self.expect_step(RegistrationStep::Checker)?;
        self.state.name = report.name;
        self.state.available = report.available;
        if report.available {
            self.step = RegistrationStep::Onboarding;
        }
        Ok(())
    }

    pub fn complete_onboarding(&mut self, answers: OnboardingAnswers) -> CoreResult<()> {
        self.expect_step(RegistrationStep::Onboarding)?;
        self.state.answers = Some(answers);
        self.step = RegistrationStep::Packages;
        Ok(())
    }

    pub fn select_package(&mut self, tier: PackageTier) -> CoreResult<()> {
        self.expect_step(RegistrationStep::Packages)?;
        self.state.selected_package = Some(tier);
        self.step = RegistrationStep::Payment;
        Ok(())
    }

    pub fn complete_payment(&mut self, addons: Vec<AddonId>) -> CoreResult<()> {
        self.expect_step(RegistrationStep::Payment)?;
        self.state.additional_services = addons;
        self.step = RegistrationStep::Dashboard;
        Ok(())
    }

    /// Return one step. No-op on the first step and on the terminal
    /// dashboard. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Tier prices, once the questionnaire is complete.
    pub fn quote(&self) -> Option<Quote> {
        self.state.answers.as_ref().map(Quote::from_answers)
    }

    /// Checkout totals for the current selection.
    pub fn order(&self) -> Option<OrderSummary> {
        let quote = self.quote()?;
        let tier = self.state.selected_package?;
        OrderSummary::compute(&quote, tier, &self.state.additional_services, None).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{ApplicantType, BusinessNature, TrademarkClass};

    fn sample_answers() -> OnboardingAnswers {
        OnboardingAnswers {
            applicant_type: ApplicantType::Startup,
            business_nature: BusinessNature::Services,
            trademark_class: TrademarkClass::Technology,
            includes_logo: false,
        }
    }

    fn report(name: &str, available: bool) -> AvailabilityReport {
        AvailabilityReport {
            name: name.to_string(),
            available,
        }
    }

    #[test]
    fn test_unavailable_name_does_not_advance() {
        let mut flow = RegistrationFlow::new();
        flow.record_check(report("TakenBrand", false)).unwrap();
        assert_eq!(flow.step(), RegistrationStep::Checker);
        assert_eq!(flow.state().name, "TakenBrand");
        assert!(!flow.state().available);
    }

    #[test]
    fn test_available_name_advances_to_onboarding() {
        let mut flow = RegistrationFlow::new();
        flow.record_check(report("TechNova", true)).unwrap();
        assert_eq!(flow.step(), RegistrationStep::Onboarding);
        assert!(flow.state().available);
    }

    #[test]
    fn test_full_walk_to_dashboard() {
        let mut flow = RegistrationFlow::new();
        flow.record_check(report("TechNova", true)).unwrap();
        flow.complete_onboarding(sample_answers()).unwrap();
        assert_eq!(flow.step(), RegistrationStep::Packages);

        flow.select_package(PackageTier::Standard).unwrap();
        assert_eq!(flow.step(), RegistrationStep::Payment);

        flow.complete_payment(vec![AddonId::Gst]).unwrap();
        assert_eq!(flow.step(), RegistrationStep::Dashboard);

        let order = flow.order().unwrap();
        assert_eq!(order.package, PackageTier::Standard);
        assert_eq!(
            order.subtotal,
            flow.quote().unwrap().standard + AddonId::Gst.price()
        );
    }

    #[test]
    fn test_out_of_order_completion_is_rejected() {
        let mut flow = RegistrationFlow::new();
        let err = flow.complete_onboarding(sample_answers()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::WrongStep {
                expected: RegistrationStep::Onboarding,
                actual: RegistrationStep::Checker,
            }
        ));
    }

    #[test]
    fn test_back_walks_one_step_and_stops_at_edges() {
        let mut flow = RegistrationFlow::new();
        assert!(!flow.back());

        flow.record_check(report("EcoFresh", true)).unwrap();
        flow.complete_onboarding(sample_answers()).unwrap();
        assert!(flow.back());
        assert_eq!(flow.step(), RegistrationStep::Onboarding);
        assert!(flow.back());
        assert_eq!(flow.step(), RegistrationStep::Checker);
        assert!(!flow.back());
    }

    #[test]
    fn test_dashboard_is_terminal() {
        let mut flow = RegistrationFlow::new();
        flow.record_check(report("EcoFresh", true)).unwrap();
        flow.complete_onboarding(sample_answers()).unwrap();
        flow.select_package(PackageTier::Basic).unwrap();
        flow.complete_payment(Vec::new()).unwrap();

        assert_eq!(flow.step(), RegistrationStep::Dashboard);
        assert!(!flow.back());
        assert!(flow
            .record_check(report("Another", true))
            .is_err());
    }

    #[test]
    fn test_quote_absent_until_onboarding_completes() {
        let mut flow = RegistrationFlow::new();
        assert!(flow.quote().is_none());
        assert!(flow.order().is_none());

        flow.record_check(report("TechNova", true)).unwrap();
        flow.complete_onboarding(sample_answers()).unwrap();
        assert!(flow.quote().is_some());
        // No package selected yet.
        assert!(flow.order().is_none());
    }
}
