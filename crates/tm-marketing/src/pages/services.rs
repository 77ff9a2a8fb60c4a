//! Services page

use crate::components::*;
use leptos::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Trademark Registration"</h1>
                        <p class="text-xl text-gray-300">
                            "Protect your brand identity with our comprehensive trademark registration services."
                        </p>
                    </div>
                </div>
            </section>

            // Benefits
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        <div>
                            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Why It Matters"</h2>
                            <ul class="space-y-4">
                                <Benefit text="Exclusive rights to use your trademark nationwide"/>
                                <Benefit text="Legal protection against unauthorized use"/>
                                <Benefit text="Enhanced brand value and credibility"/>
                                <Benefit text="Ability to license your trademark"/>
                                <Benefit text="Prevention of trademark theft"/>
                            </ul>
                        </div>
                        <div>
                            <h2 class="text-2xl font-bold text-gray-900 mb-6">"The Process"</h2>
                            <div class="space-y-6">
                                <ProcessStep number="1" text="Trademark Search & Availability Check"/>
                                <ProcessStep number="2" text="Preparation & Filing of Application"/>
                                <ProcessStep number="3" text="Examination by Trademark Registrar"/>
                                <ProcessStep number="4" text="Publication in Trademark Journal"/>
                                <ProcessStep number="5" text="Registration Certificate Issuance"/>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Other services
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">"More Ways We Can Help"</h2>
                        <p class="text-lg text-gray-600">
                            "Registration is just the start. We cover the paperwork a growing "
                            "business runs into."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <ServiceCard
                            icon="🏢"
                            title="Company Registration"
                            description="Start your business journey with hassle-free company incorporation services."
                        />
                        <ServiceCard
                            icon="🧾"
                            title="GST Registration"
                            description="Comply with GST regulations and streamline your tax filing process."
                        />
                        <ServiceCard
                            icon="🍽️"
                            title="FSSAI License"
                            description="Obtain food business licenses and certifications for your food business."
                        />
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 text-center">
                    <a href="/register" class="inline-block px-8 py-4 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg shadow-lg transition">
                        "Check Your Trademark Availability"
                    </a>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Benefit(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start">
            <span class="text-green-500 mr-3 mt-1">"✓"</span>
            <span class="text-gray-700">{text}</span>
        </li>
    }
}

#[component]
fn ProcessStep(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <div class="flex-shrink-0 w-10 h-10 bg-orange-500 text-white rounded-full flex items-center justify-center font-bold">
                {number}
            </div>
            <span class="ml-4 text-gray-700">{text}</span>
        </div>
    }
}
