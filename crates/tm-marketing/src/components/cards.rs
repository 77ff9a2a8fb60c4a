//! Card components for marketing pages

use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 border-l-4 border-orange-500">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-sm text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-orange-500 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-8">
            <p class="text-gray-700 italic mb-6">"\""{ quote }"\""</p>
            <div>
                <p class="font-semibold text-gray-900">{author}</p>
                <p class="text-sm text-gray-600">{role}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-orange-500">{value}</div>
            <div class="text-gray-600 mt-1">{label}</div>
        </div>
    }
}

#[component]
pub fn PricingFeature(text: &'static str, included: bool) -> impl IntoView {
    view! {
        <li class="flex items-center">
            <span class=if included { "text-green-500 mr-2" } else { "text-gray-300 mr-2" }>
                {if included { "✓" } else { "✗" }}
            </span>
            <span class=if included { "text-gray-700" } else { "text-gray-400" }>{text}</span>
        </li>
    }
}
