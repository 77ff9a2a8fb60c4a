//! Availability checker step

use leptos::*;
use std::time::Duration;
use tm_core::availability::{AvailabilityReport, MockRegistry};
use tm_core::wizard::RegistrationFlow;
use tm_core::CoreError;

/// Simulated registry latency.
const CHECK_DELAY: Duration = Duration::from_millis(800);

#[component]
pub fn CheckerStep(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (checking, set_checking) = create_signal(false);
    let (conflict, set_conflict) = create_signal(None::<AvailabilityReport>);
    let (error, set_error) = create_signal(None::<String>);

    let run_check = move |_| {
        if checking.get() {
            return;
        }
        set_error.set(None);
        set_conflict.set(None);

        let candidate = name.get();
        // Validation failures surface immediately, without the fake
        // network wait.
        if candidate.trim().is_empty() {
            set_error.set(Some(CoreError::EmptyName.to_string()));
            return;
        }

        set_checking.set(true);
        set_timeout(
            move || {
                set_checking.set(false);
                match MockRegistry::evaluate(&candidate) {
                    // An available name advances straight into the
                    // questionnaire; only a conflict keeps us here.
                    Ok(result) if result.available => {
                        flow.update(|f| {
                            if let Err(err) = f.record_check(result) {
                                tracing::warn!("check not recorded: {err}");
                            }
                        });
                    }
                    Ok(result) => set_conflict.set(Some(result)),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            },
            CHECK_DELAY,
        );
    };

    view! {
        <div class="bg-white rounded-lg shadow-md p-8">
            <p class="text-gray-600 mb-6">
                "Enter your brand name to check whether it is available for trademark registration."
            </p>

            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="text"
                    class="flex-1 border border-gray-300 rounded-lg px-4 py-3 focus:outline-none focus:ring-2 focus:ring-orange-500"
                    placeholder="Enter your brand name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button
                    class="bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white px-6 py-3 rounded-lg font-medium"
                    disabled=checking
                    on:click=run_check
                >
                    {move || if checking.get() { "Checking..." } else { "Check Availability" }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="mt-4 p-4 bg-red-50 border border-red-200 text-red-700 rounded-lg">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || checking.get()>
                <div class="mt-6 flex items-center justify-center text-gray-500">
                    <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-orange-500 mr-3"></div>
                    "Searching the trademark registry..."
                </div>
            </Show>

            {move || {
                conflict
                    .get()
                    .map(|result| {
                        view! {
                            <div class="mt-6 p-6 bg-orange-50 border border-orange-200 rounded-lg">
                                <h3 class="text-lg font-semibold text-orange-800">
                                    "⚠️ Conflict Found"
                                </h3>
                                <p class="text-orange-700 mt-1">
                                    "\"" {result.name.clone()} "\" may conflict with an existing trademark. Try a different name."
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
