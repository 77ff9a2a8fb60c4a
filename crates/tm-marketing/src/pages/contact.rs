//! Contact page

use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (interest, set_interest) = create_signal(String::from("trademark"));
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // In production, this would send to an API endpoint
        set_submitted.set(true);
    };

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Talk to an Expert"</h1>
                        <p class="text-xl text-gray-300">
                            "Not sure which registration you need? We'll point you the right way."
                        </p>
                    </div>
                </div>
            </section>

            // Contact Form
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        // Form
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <Show
                                when=move || !submitted.get()
                                fallback=move || view! {
                                    <div class="text-center py-12">
                                        <div class="text-5xl mb-4">"✓"</div>
                                        <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                                        <p class="text-gray-600">"We'll be in touch within 24 hours."</p>
                                    </div>
                                }
                            >
                                <form on:submit=on_submit class="space-y-6">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                                        <input
                                            type="text"
                                            required
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500"
                                            placeholder="Your name"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                                        <input
                                            type="email"
                                            required
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500"
                                            placeholder="you@company.com"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"I'm interested in..."</label>
                                        <select
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500"
                                            on:change=move |ev| set_interest.set(event_target_value(&ev))
                                            prop:value=interest
                                        >
                                            <option value="trademark">"Trademark Registration"</option>
                                            <option value="company">"Company Registration"</option>
                                            <option value="gst">"GST Registration"</option>
                                            <option value="fssai">"FSSAI License"</option>
                                            <option value="legal">"Legal Drafting"</option>
                                            <option value="other">"Other"</option>
                                        </select>
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-2">"Message"</label>
                                        <textarea
                                            rows="4"
                                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500"
                                            placeholder="Tell us about your business..."
                                            on:input=move |ev| set_message.set(event_target_value(&ev))
                                            prop:value=message
                                        ></textarea>
                                    </div>

                                    <button
                                        type="submit"
                                        class="w-full py-4 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg transition"
                                    >
                                        "Send Message"
                                    </button>
                                </form>
                            </Show>
                        </div>

                        // Contact Info
                        <div class="space-y-8">
                            <div>
                                <h2 class="text-2xl font-bold text-gray-900 mb-4">"We Reply Fast"</h2>
                                <p class="text-gray-600">
                                    "Whether you're filing your first trademark or moving a whole "
                                    "portfolio, our legal team is happy to talk it through."
                                </p>
                            </div>

                            <div class="space-y-6">
                                <div class="flex items-start">
                                    <div class="flex-shrink-0 w-12 h-12 bg-orange-100 rounded-lg flex items-center justify-center">
                                        <span class="text-xl">"📧"</span>
                                    </div>
                                    <div class="ml-4">
                                        <h3 class="font-semibold text-gray-900">"Email"</h3>
                                        <p class="text-gray-600">"hello@trademarkdesk.in"</p>
                                    </div>
                                </div>

                                <div class="flex items-start">
                                    <div class="flex-shrink-0 w-12 h-12 bg-orange-100 rounded-lg flex items-center justify-center">
                                        <span class="text-xl">"🕐"</span>
                                    </div>
                                    <div class="ml-4">
                                        <h3 class="font-semibold text-gray-900">"Response Time"</h3>
                                        <p class="text-gray-600">"We respond within 24 hours"</p>
                                    </div>
                                </div>

                                <div class="flex items-start">
                                    <div class="flex-shrink-0 w-12 h-12 bg-orange-100 rounded-lg flex items-center justify-center">
                                        <span class="text-xl">"📞"</span>
                                    </div>
                                    <div class="ml-4">
                                        <h3 class="font-semibold text-gray-900">"Phone"</h3>
                                        <p class="text-gray-600">"+91 98765 43210 (Mon-Sat, 10am-7pm)"</p>
                                    </div>
                                </div>
                            </div>

                            <div class="bg-gray-100 rounded-lg p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Already Know Your Name?"</h3>
                                <p class="text-gray-600 mb-4">
                                    "Skip the queue and check whether your trademark is available "
                                    "right now."
                                </p>
                                <a href="/register" class="text-orange-600 hover:text-orange-700 font-medium">
                                    "Check availability →"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
