//! Registration wizard
//!
//! One [`RegistrationFlow`] signal drives the whole wizard; each step
//! component mutates it through `update` and the shell re-renders on the
//! step it lands on.

mod checker;
mod onboarding;
mod packages;
mod payment;

use checker::CheckerStep;
use leptos::*;
use onboarding::OnboardingStep;
use packages::PackagesStep;
use payment::PaymentStep;
use tm_core::wizard::{RegistrationFlow, RegistrationStep};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let flow = create_rw_signal(RegistrationFlow::new());

    let step = move || flow.with(|f| f.step());

    view! {
        <div class="max-w-3xl mx-auto">
            <StepIndicator step=Signal::derive(step)/>

            <h1 class="text-3xl font-bold text-center text-gray-900 mb-8">
                {move || step().title()}
            </h1>

            {move || match step() {
                RegistrationStep::Checker => view! { <CheckerStep flow=flow/> }.into_view(),
                RegistrationStep::Onboarding => view! { <OnboardingStep flow=flow/> }.into_view(),
                RegistrationStep::Packages => view! { <PackagesStep flow=flow/> }.into_view(),
                RegistrationStep::Payment => view! { <PaymentStep flow=flow/> }.into_view(),
                RegistrationStep::Dashboard => view! { <CompletedStep flow=flow/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn StepIndicator(#[prop(into)] step: Signal<RegistrationStep>) -> impl IntoView {
    const STEPS: [(RegistrationStep, &str); 4] = [
        (RegistrationStep::Checker, "Check"),
        (RegistrationStep::Onboarding, "Details"),
        (RegistrationStep::Packages, "Package"),
        (RegistrationStep::Payment, "Payment"),
    ];

    let position = move |s: RegistrationStep| STEPS.iter().position(|(step, _)| *step == s);

    view! {
        <div class="flex justify-center items-center mb-8">
            {STEPS
                .iter()
                .enumerate()
                .map(|(idx, &(_, label))| {
                    let reached = move || {
                        // The terminal step lights every marker.
                        position(step.get()).map_or(true, |current| idx <= current)
                    };
                    view! {
                        <div class="flex items-center">
                            <Show when={move || idx > 0}>
                                <div class="w-8 md:w-16 h-0.5 bg-gray-300 mx-1"></div>
                            </Show>
                            <div class="flex flex-col items-center">
                                <div class=move || {
                                    if reached() {
                                        "w-8 h-8 rounded-full bg-orange-500 text-white flex items-center justify-center text-sm font-medium"
                                    } else {
                                        "w-8 h-8 rounded-full bg-gray-200 text-gray-500 flex items-center justify-center text-sm font-medium"
                                    }
                                }>
                                    {idx + 1}
                                </div>
                                <span class="text-xs text-gray-500 mt-1 hidden md:block">{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CompletedStep(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let name = move || flow.with(|f| f.state().name.clone());
    let total = move || flow.with(|f| f.order().map(|o| o.total));

    view! {
        <div class="bg-white rounded-lg shadow-md p-8 text-center">
            <p class="text-5xl mb-4">"🎉"</p>
            <h2 class="text-2xl font-bold text-gray-900 mb-2">"Payment Successful!"</h2>
            <p class="text-gray-600 mb-2">
                "Your trademark application for " <strong>{name}</strong> " has been submitted."
            </p>
            <Show when=move || total().is_some()>
                <p class="text-gray-600 mb-6">
                    "Amount paid: ₹"
                    {move || total().map(tm_core::pricing::format_inr).unwrap_or_default()}
                </p>
            </Show>
            <a
                href="/"
                class="inline-block bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 rounded-lg font-medium"
            >
                "Go to Dashboard"
            </a>
        </div>
    }
}
