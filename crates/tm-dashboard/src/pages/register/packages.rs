//! Package selection step

use leptos::*;
use tm_core::pricing::{format_inr, PackageOffer};
use tm_core::wizard::RegistrationFlow;

#[component]
pub fn PackagesStep(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    // The flow only reaches this step with a completed questionnaire.
    let offers = move || {
        flow.with(|f| f.quote())
            .map(|quote| quote.packages())
            .unwrap_or_default()
    };

    let back = move |_| {
        flow.update(|f| {
            f.back();
        });
    };

    view! {
        <div>
            <p class="text-center text-gray-600 mb-8">
                "Prices are tailored to your answers. All packages include government fees for one class."
            </p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {move || {
                    offers()
                        .into_iter()
                        .map(|offer| view! { <PackageCard offer=offer flow=flow/> })
                        .collect_view()
                }}
            </div>

            <div class="mt-8">
                <button
                    class="px-6 py-2 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                    on:click=back
                >
                    "Back"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PackageCard(offer: PackageOffer, flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let tier = offer.tier;
    let select = move |_| {
        flow.update(|f| {
            if let Err(err) = f.select_package(tier) {
                tracing::warn!("package not recorded: {err}");
            }
        });
    };

    let card_class = if offer.recommended {
        "relative bg-white rounded-lg shadow-lg border-2 border-orange-500 p-6 flex flex-col"
    } else {
        "relative bg-white rounded-lg shadow-md p-6 flex flex-col"
    };

    view! {
        <div class=card_class>
            <Show when=move || offer.recommended>
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-orange-500 text-white text-xs font-bold px-3 py-1 rounded-full">
                    "RECOMMENDED"
                </span>
            </Show>

            <h3 class="text-xl font-bold text-gray-900">{offer.name}</h3>
            <p class="text-gray-500 text-sm mt-1">{offer.description}</p>

            <p class="mt-4">
                <span class="text-3xl font-bold text-gray-900">"₹" {format_inr(offer.price)}</span>
                <span class="text-gray-500 text-sm ml-1">"+ GST"</span>
            </p>
            <p class="text-sm text-gray-500 mt-1">"Registration time: " {offer.duration}</p>

            <ul class="mt-4 space-y-2 flex-1">
                {offer
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-start text-sm text-gray-700">
                                <span class="text-green-500 mr-2">"✓"</span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class="mt-6 w-full bg-orange-500 hover:bg-orange-600 text-white py-2 rounded-lg font-medium"
                on:click=select
            >
                "Select " {offer.name}
            </button>
        </div>
    }
}
