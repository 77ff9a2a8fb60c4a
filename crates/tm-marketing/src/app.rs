//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/services" view=ServicesPage/>
                        <Route path="/pricing" view=PricingPage/>
                        <Route path="/contact" view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
