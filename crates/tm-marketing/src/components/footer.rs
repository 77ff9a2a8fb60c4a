//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"™️"</span>
                            <span class="text-xl font-bold text-white">"TrademarkDesk"</span>
                        </div>
                        <p class="text-sm">
                            "Trademark and company registration made simple. "
                            "Quick, reliable, and guided by legal experts."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-white font-semibold mb-4">"Services"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/services" class="hover:text-white transition">"Trademark Registration"</a></li>
                            <li><a href="/services" class="hover:text-white transition">"Company Registration"</a></li>
                            <li><a href="/services" class="hover:text-white transition">"GST Registration"</a></li>
                            <li><a href="/services" class="hover:text-white transition">"FSSAI License"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-white font-semibold mb-4">"Company"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/pricing" class="hover:text-white transition">"Pricing"</a></li>
                            <li><a href="/contact" class="hover:text-white transition">"Contact"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-white font-semibold mb-4">"Get Started"</h3>
                        <p class="text-sm mb-4">"Check if your trademark is available in seconds."</p>
                        <a href="/register" class="inline-block px-4 py-2 bg-orange-500 hover:bg-orange-600 text-white font-medium rounded-lg transition">
                            "Check Availability"
                        </a>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    <p>"© 2024 TrademarkDesk. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
