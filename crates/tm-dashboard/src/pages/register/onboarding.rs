//! Onboarding questionnaire step
//!
//! Four questions asked one at a time. A running price estimate updates
//! as answers land; the final answer hands a complete
//! [`OnboardingAnswers`] to the flow.

use crate::components::ProgressBar;
use leptos::*;
use tm_core::onboarding::{ApplicantType, BusinessNature, OnboardingAnswers, TrademarkClass};
use tm_core::pricing::format_inr;
use tm_core::wizard::RegistrationFlow;

const QUESTION_COUNT: usize = 4;

#[component]
pub fn OnboardingStep(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let (question, set_question) = create_signal(0usize);
    let (applicant, set_applicant) = create_signal(None::<ApplicantType>);
    let (nature, set_nature) = create_signal(None::<BusinessNature>);
    let (class, set_class) = create_signal(None::<TrademarkClass>);
    let (logo, set_logo) = create_signal(None::<bool>);

    // Estimate from whatever is answered so far; unanswered questions
    // contribute nothing, matching the floor price.
    let estimate = move || {
        let mut price = 7999u32;
        if let Some(a) = applicant.get() {
            price += a.price_bonus();
        }
        if let Some(n) = nature.get() {
            price += n.price_bonus();
        }
        if logo.get() == Some(true) {
            price += 1000;
        }
        price
    };

    let answered = move || match question.get() {
        0 => applicant.get().is_some(),
        1 => nature.get().is_some(),
        2 => class.get().is_some(),
        _ => logo.get().is_some(),
    };

    let percent = Signal::derive(move || ((question.get() + 1) * 100 / QUESTION_COUNT) as u8);

    let next = move |_| {
        if !answered() {
            return;
        }
        if question.get() + 1 < QUESTION_COUNT {
            set_question.update(|q| *q += 1);
            return;
        }
        // All four are Some once the last Next is reachable.
        if let (Some(applicant_type), Some(business_nature), Some(trademark_class), Some(includes_logo)) =
            (applicant.get(), nature.get(), class.get(), logo.get())
        {
            let answers = OnboardingAnswers {
                applicant_type,
                business_nature,
                trademark_class,
                includes_logo,
            };
            flow.update(|f| {
                if let Err(err) = f.complete_onboarding(answers) {
                    tracing::warn!("onboarding not recorded: {err}");
                }
            });
        }
    };

    let back = move |_| {
        if question.get() > 0 {
            set_question.update(|q| *q -= 1);
        } else {
            flow.update(|f| {
                f.back();
            });
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow-md p-8">
            <div class="flex justify-between mb-2">
                <span class="text-sm font-medium text-gray-700">
                    {move || format!("Step {} of {}", question.get() + 1, QUESTION_COUNT)}
                </span>
                <span class="text-sm text-gray-500">
                    "Estimated price: ₹" {move || format_inr(estimate())}
                </span>
            </div>
            <ProgressBar percent=percent/>

            <div class="mt-8">
                {move || match question.get() {
                    0 => view! {
                        <QuestionOptions
                            title="Who is applying for the trademark?"
                            options={ApplicantType::ALL
                                .iter()
                                .map(|&a| (a.label().to_string(), applicant.get() == Some(a)))
                                .collect::<Vec<_>>()}
                            on_pick=move |idx| set_applicant.set(Some(ApplicantType::ALL[idx]))
                        />
                    }.into_view(),
                    1 => view! {
                        <QuestionOptions
                            title="What does your business offer?"
                            options={BusinessNature::ALL
                                .iter()
                                .map(|&n| (n.label().to_string(), nature.get() == Some(n)))
                                .collect::<Vec<_>>()}
                            on_pick=move |idx| set_nature.set(Some(BusinessNature::ALL[idx]))
                        />
                    }.into_view(),
                    2 => view! {
                        <QuestionOptions
                            title="Which class does your trademark belong to?"
                            options={TrademarkClass::ALL
                                .iter()
                                .map(|&c| (c.to_string(), class.get() == Some(c)))
                                .collect::<Vec<_>>()}
                            on_pick=move |idx| set_class.set(Some(TrademarkClass::ALL[idx]))
                        />
                    }.into_view(),
                    _ => view! {
                        <QuestionOptions
                            title="Do you want to register a logo along with the name?"
                            options={vec![
                                ("Yes, include my logo".to_string(), logo.get() == Some(true)),
                                ("No, name only".to_string(), logo.get() == Some(false)),
                            ]}
                            on_pick=move |idx| set_logo.set(Some(idx == 0))
                        />
                    }.into_view(),
                }}
            </div>

            <div class="flex justify-between mt-8">
                <button
                    class="px-6 py-2 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                    on:click=back
                >
                    "Back"
                </button>
                <button
                    class="px-6 py-2 bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white rounded-lg font-medium"
                    disabled=move || !answered()
                    on:click=next
                >
                    {move || {
                        if question.get() + 1 < QUESTION_COUNT { "Next" } else { "See Packages" }
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn QuestionOptions(
    title: &'static str,
    options: Vec<(String, bool)>,
    on_pick: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{title}</h2>
            <div class="space-y-3">
                {options
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (label, selected))| {
                        let class = if selected {
                            "w-full text-left px-4 py-3 rounded-lg border-2 border-orange-500 bg-orange-50 text-orange-700 font-medium"
                        } else {
                            "w-full text-left px-4 py-3 rounded-lg border border-gray-300 hover:border-orange-300"
                        };
                        view! {
                            <button class=class on:click=move |_| on_pick(idx)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
