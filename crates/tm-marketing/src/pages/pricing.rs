//! Pricing page
//!
//! Shows the list prices for the three registration packages. The wizard
//! derives the actual quote from the onboarding answers; these are the
//! starting-from figures.

use crate::components::PricingFeature;
use leptos::*;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Simple, Transparent Pricing"</h1>
                        <p class="text-xl text-gray-300">
                            "Choose the package that fits your registration needs. Final pricing "
                            "is quoted after a few quick questions about your business."
                        </p>
                    </div>
                </div>
            </section>

            // Pricing Cards
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        // Basic
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <div class="text-center mb-8">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Basic"</h3>
                                <div class="text-4xl font-bold text-gray-900 mb-1">
                                    "₹7,999"
                                    <span class="text-lg font-normal text-gray-500">" onwards"</span>
                                </div>
                                <p class="text-gray-600">"Essential trademark registration services"</p>
                            </div>
                            <ul class="space-y-4 mb-8">
                                <PricingFeature text="Trademark Search Report" included=true/>
                                <PricingFeature text="Application Filing" included=true/>
                                <PricingFeature text="Government Fee for 1 Class" included=true/>
                                <PricingFeature text="Basic Documentation" included=true/>
                                <PricingFeature text="Email Support" included=true/>
                                <PricingFeature text="Response to Examination Report" included=false/>
                                <PricingFeature text="Priority Processing" included=false/>
                                <PricingFeature text="Dedicated Legal Expert" included=false/>
                            </ul>
                            <a href="/register" class="block w-full py-3 text-center bg-gray-100 hover:bg-gray-200 text-gray-900 font-semibold rounded-lg transition">
                                "Get Started"
                            </a>
                        </div>

                        // Standard
                        <div class="bg-white rounded-xl shadow-xl p-8 border-2 border-orange-500 relative">
                            <div class="absolute -top-4 left-1/2 transform -translate-x-1/2 bg-orange-500 text-white px-4 py-1 rounded-full text-sm font-medium">
                                "RECOMMENDED"
                            </div>
                            <div class="text-center mb-8">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Standard"</h3>
                                <div class="text-4xl font-bold text-gray-900 mb-1">
                                    "₹12,999"
                                    <span class="text-lg font-normal text-gray-500">" onwards"</span>
                                </div>
                                <p class="text-gray-600">"Comprehensive registration with support"</p>
                            </div>
                            <ul class="space-y-4 mb-8">
                                <PricingFeature text="Everything in Basic" included=true/>
                                <PricingFeature text="Response to Examination Report" included=true/>
                                <PricingFeature text="Certificate Delivery" included=true/>
                                <PricingFeature text="Documentation Support" included=true/>
                                <PricingFeature text="Phone & Email Support" included=true/>
                                <PricingFeature text="Priority Processing" included=false/>
                                <PricingFeature text="Dedicated Legal Expert" included=false/>
                                <PricingFeature text="Post-Registration Support" included=false/>
                            </ul>
                            <a href="/register" class="block w-full py-3 text-center bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg transition">
                                "Get Started"
                            </a>
                        </div>

                        // Premium
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <div class="text-center mb-8">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Premium"</h3>
                                <div class="text-4xl font-bold text-gray-900 mb-1">
                                    "₹19,999"
                                    <span class="text-lg font-normal text-gray-500">" onwards"</span>
                                </div>
                                <p class="text-gray-600">"Complete protection with priority handling"</p>
                            </div>
                            <ul class="space-y-4 mb-8">
                                <PricingFeature text="Everything in Standard" included=true/>
                                <PricingFeature text="Priority Processing" included=true/>
                                <PricingFeature text="Multi-class Filing Support" included=true/>
                                <PricingFeature text="Dedicated Legal Expert" included=true/>
                                <PricingFeature text="1 Year of Post-Registration Support" included=true/>
                            </ul>
                            <a href="/register" class="block w-full py-3 text-center bg-gray-100 hover:bg-gray-200 text-gray-900 font-semibold rounded-lg transition">
                                "Get Started"
                            </a>
                        </div>
                    </div>

                    <div class="max-w-3xl mx-auto mt-12 text-center text-gray-500 text-sm">
                        <p>
                            "All packages cover one trademark class. Estimated registration time "
                            "is 18-24 months. GST at 18% applies at checkout."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
