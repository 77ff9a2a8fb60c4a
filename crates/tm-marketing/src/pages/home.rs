//! Home page

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-b from-gray-50 to-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6">
                            "Protect Your Brand with "
                            <span class="text-orange-500">"Hassle-free"</span>
                            " Trademark Registration"
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-600 mb-8">
                            "Secure your brand identity with our comprehensive trademark registration "
                            "services. Quick, reliable, and guided by legal experts."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/register" class="px-8 py-4 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg shadow-lg transition">
                                "Register your Trademark NOW"
                            </a>
                            <a href="/services" class="px-8 py-4 bg-white hover:bg-gray-50 text-gray-900 font-semibold rounded-lg border border-gray-300 transition">
                                "Explore Services"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-12 bg-white border-y border-gray-100">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-4xl mx-auto">
                        <StatCard value="10,000+" label="Trademarks Registered"/>
                        <StatCard value="8,500+" label="Satisfied Clients"/>
                        <StatCard value="97%" label="Success Rate"/>
                        <StatCard value="10+" label="Years of Experience"/>
                    </div>
                </div>
            </section>

            // Why register
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Why Register Your Trademark?"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "A registered trademark is the foundation of your brand. It keeps "
                            "competitors at a distance and builds trust with your customers."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-4 gap-8">
                        <FeatureCard
                            icon="🛡️"
                            title="Legal Protection"
                            description="Get exclusive rights to use your trademark nationwide and prevent others from using similar marks."
                        />
                        <FeatureCard
                            icon="⚡"
                            title="Quick Process"
                            description="Our streamlined process ensures your trademark application is filed quickly and accurately."
                        />
                        <FeatureCard
                            icon="⚖️"
                            title="Expert Guidance"
                            description="Our legal experts guide you through every step of the trademark registration process."
                        />
                        <FeatureCard
                            icon="📈"
                            title="Brand Value"
                            description="Enhance your brand value and credibility with a registered trademark."
                        />
                    </div>
                </div>
            </section>

            // How it works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "How It Works"
                        </h2>
                    </div>
                    <div class="grid md:grid-cols-4 gap-8 max-w-5xl mx-auto">
                        <StepCard
                            number="1"
                            title="Check Availability"
                            description="Search the registry for conflicts with your desired trademark name."
                        />
                        <StepCard
                            number="2"
                            title="Answer a Few Questions"
                            description="Tell us about your business so we can recommend the right package."
                        />
                        <StepCard
                            number="3"
                            title="Pick a Package"
                            description="Choose Basic, Standard, or Premium based on the support you need."
                        />
                        <StepCard
                            number="4"
                            title="We File For You"
                            description="Our experts prepare and file your application and keep you updated."
                        />
                    </div>
                </div>
            </section>

            // Services grid
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Everything Your Business Needs"
                        </h2>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <ServiceCard
                            icon="™️"
                            title="Trademark Registration"
                            description="Protect your brand identity with our comprehensive trademark registration services."
                        />
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
                            icon="📄"
                            title="Legal Drafting"
                            description="Get professionally drafted legal documents tailored to your business needs."
                        />
                        <ServiceCard
                            icon="🍽️"
                            title="FSSAI License"
                            description="Obtain food business licenses and certifications for your food business."
                        />
                        <ServiceCard
                            icon="💡"
                            title="IPR Services"
                            description="Comprehensive intellectual property rights services for businesses."
                        />
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-blue-900 text-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl font-bold mb-4">"What Our Clients Say"</h2>
                        <p class="text-lg text-blue-100">
                            "Thousands of businesses trust us with their brand."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        <TestimonialCard
                            quote="TrademarkDesk made trademark registration incredibly simple. Their team guided me through the entire process, and I received my trademark in record time."
                            author="Priya Sharma"
                            role="Founder, DesignCraft Studio"
                        />
                        <TestimonialCard
                            quote="As a first-time entrepreneur, I was unsure about the legal requirements. TrademarkDesk not only helped with my company registration but also provided valuable advice on protecting my brand."
                            author="Rahul Mehta"
                            role="CEO, TechInnovate Solutions"
                        />
                        <TestimonialCard
                            quote="The attention to detail and personalized service was exceptional. They made the complex process of trademark registration feel effortless."
                            author="Anjali Desai"
                            role="Creative Director, Artisan Foods"
                        />
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-16 bg-gradient-to-r from-blue-900 to-blue-800 text-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h2 class="text-3xl font-bold mb-6">"Ready to Secure Your Brand?"</h2>
                        <p class="text-lg mb-8 text-blue-100">
                            "Take the first step towards protecting your intellectual property. "
                            "Our experts will guide you through the entire process."
                        </p>
                        <a href="/register" class="inline-block px-8 py-4 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg shadow-lg transition">
                            "Start Your Trademark Registration Now"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
