//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-50">
                <Nav/>
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/register" view=RegisterPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
