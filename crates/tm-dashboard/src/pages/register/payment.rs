//! Payment step
//!
//! Add-on toggles and the promo code feed the order summary live. The
//! payment itself is simulated; after a short delay the flow lands on
//! the completed screen.

use leptos::*;
use std::time::Duration;
use tm_core::pricing::{addon_catalog, format_inr, validate_promo, AddonId, OrderSummary};
use tm_core::wizard::RegistrationFlow;

const PAYMENT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
    ];

    fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

#[component]
pub fn PaymentStep(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let (addons, set_addons) = create_signal(Vec::<AddonId>::new());
    let (promo_input, set_promo_input) = create_signal(String::new());
    let (promo, set_promo) = create_signal(None::<u8>);
    let (promo_error, set_promo_error) = create_signal(None::<String>);
    let (method, set_method) = create_signal(PaymentMethod::Card);
    let (processing, set_processing) = create_signal(false);

    let summary = move || {
        flow.with(|f| {
            let quote = f.quote()?;
            let tier = f.state().selected_package?;
            OrderSummary::compute(&quote, tier, &addons.get(), None).ok()
        })
    };

    let toggle_addon = move |addon: AddonId| {
        set_addons.update(|selected| {
            if let Some(pos) = selected.iter().position(|a| *a == addon) {
                selected.remove(pos);
            } else {
                selected.push(addon);
            }
        });
    };

    let apply_promo = move |_| {
        let code = promo_input.get();
        match validate_promo(&code) {
            Ok(percent) => {
                set_promo.set(Some(percent));
                set_promo_error.set(None);
            }
            Err(err) => {
                set_promo.set(None);
                set_promo_error.set(Some(err.to_string()));
            }
        }
    };

    let pay = move |_| {
        if processing.get() {
            return;
        }
        set_processing.set(true);
        set_timeout(
            move || {
                flow.update(|f| {
                    if let Err(err) = f.complete_payment(addons.get()) {
                        tracing::warn!("payment not recorded: {err}");
                    }
                });
            },
            PAYMENT_DELAY,
        );
    };

    let back = move |_| {
        if !processing.get() {
            flow.update(|f| {
                f.back();
            });
        }
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            // Left: add-ons and payment method
            <div class="space-y-6">
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h2 class="text-lg font-semibold mb-4">"Additional Services"</h2>
                    <div class="space-y-3">
                        {addon_catalog()
                            .into_iter()
                            .map(|addon| {
                                let id = addon.id;
                                let selected = move || addons.get().contains(&id);
                                view! {
                                    <label class="flex items-start p-3 border border-gray-200 rounded-lg cursor-pointer hover:border-orange-300">
                                        <input
                                            type="checkbox"
                                            class="mt-1 mr-3"
                                            prop:checked=selected
                                            on:change=move |_| toggle_addon(id)
                                        />
                                        <span class="flex-1">
                                            <span class="font-medium text-gray-900">{addon.name}</span>
                                            <span class="block text-sm text-gray-500">{addon.description}</span>
                                        </span>
                                        <span class="font-medium">"₹" {format_inr(addon.price)}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white rounded-lg shadow-md p-6">
                    <h2 class="text-lg font-semibold mb-4">"Payment Method"</h2>
                    <div class="flex gap-2 mb-4">
                        {PaymentMethod::ALL
                            .iter()
                            .map(|&m| {
                                view! {
                                    <button
                                        class=move || {
                                            if method.get() == m {
                                                "flex-1 py-2 rounded-lg border-2 border-orange-500 bg-orange-50 text-orange-700 text-sm font-medium"
                                            } else {
                                                "flex-1 py-2 rounded-lg border border-gray-300 text-gray-600 text-sm"
                                            }
                                        }
                                        on:click=move |_| set_method.set(m)
                                    >
                                        {m.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || match method.get() {
                        PaymentMethod::Card => view! {
                            <div class="space-y-3">
                                <input type="text" class="w-full border border-gray-300 rounded-lg px-3 py-2" placeholder="Card number"/>
                                <div class="flex gap-3">
                                    <input type="text" class="flex-1 border border-gray-300 rounded-lg px-3 py-2" placeholder="MM/YY"/>
                                    <input type="text" class="flex-1 border border-gray-300 rounded-lg px-3 py-2" placeholder="CVV"/>
                                </div>
                            </div>
                        }.into_view(),
                        PaymentMethod::Upi => view! {
                            <input type="text" class="w-full border border-gray-300 rounded-lg px-3 py-2" placeholder="yourname@upi"/>
                        }.into_view(),
                        PaymentMethod::NetBanking => view! {
                            <select class="w-full border border-gray-300 rounded-lg px-3 py-2">
                                <option>"Select your bank"</option>
                                <option>"State Bank of India"</option>
                                <option>"HDFC Bank"</option>
                                <option>"ICICI Bank"</option>
                            </select>
                        }.into_view(),
                    }}
                </div>
            </div>

            // Right: order summary
            <div class="bg-white rounded-lg shadow-md p-6 h-fit">
                <h2 class="text-lg font-semibold mb-4">"Order Summary"</h2>
                {move || {
                    summary()
                        .map(|order| {
                            view! {
                                <div>
                                    <div class="flex justify-between py-2 text-gray-700">
                                        <span>{order.package.name()} " Package"</span>
                                        <span>"₹" {format_inr(order.package_price)}</span>
                                    </div>
                                    {order
                                        .addons
                                        .iter()
                                        .map(|addon| {
                                            let details = addon.details();
                                            view! {
                                                <div class="flex justify-between py-2 text-gray-700">
                                                    <span>{details.name}</span>
                                                    <span>"₹" {format_inr(details.price)}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    <div class="flex justify-between py-2 border-t border-gray-200 text-gray-700">
                                        <span>"Subtotal"</span>
                                        <span>"₹" {format_inr(order.subtotal)}</span>
                                    </div>
                                    <div class="flex justify-between py-2 text-gray-700">
                                        <span>"GST (18%)"</span>
                                        <span>"₹" {format_inr(order.gst)}</span>
                                    </div>
                                    <div class="flex justify-between py-3 border-t border-gray-200 font-bold text-gray-900">
                                        <span>"Total"</span>
                                        <span>"₹" {format_inr(order.total)}</span>
                                    </div>
                                </div>
                            }
                        })
                }}

                <div class="mt-4">
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class="flex-1 border border-gray-300 rounded-lg px-3 py-2 text-sm"
                            placeholder="Promo code"
                            prop:value=promo_input
                            on:input=move |ev| set_promo_input.set(event_target_value(&ev))
                        />
                        <button
                            class="px-4 py-2 border border-orange-500 text-orange-600 rounded-lg text-sm font-medium hover:bg-orange-50"
                            on:click=apply_promo
                        >
                            "Apply"
                        </button>
                    </div>
                    <Show when=move || promo.get().is_some()>
                        <p class="mt-2 text-sm text-green-600">
                            {move || {
                                format!(
                                    "Code accepted: {}% off your next renewal.",
                                    promo.get().unwrap_or_default(),
                                )
                            }}
                        </p>
                    </Show>
                    <Show when=move || promo_error.get().is_some()>
                        <p class="mt-2 text-sm text-red-600">
                            {move || promo_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                </div>

                <button
                    class="mt-6 w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white py-3 rounded-lg font-medium"
                    disabled=processing
                    on:click=pay
                >
                    {move || {
                        if processing.get() {
                            "Processing Payment...".to_string()
                        } else {
                            match summary() {
                                Some(order) => format!("Pay ₹{}", format_inr(order.total)),
                                None => "Pay".to_string(),
                            }
                        }
                    }}
                </button>

                <button
                    class="mt-3 w-full py-2 text-sm text-gray-600 hover:text-gray-900"
                    on:click=back
                >
                    "Back to Packages"
                </button>
            </div>
        </div>
    }
}
