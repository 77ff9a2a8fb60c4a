//! Progress bar component

use leptos::*;

#[component]
pub fn ProgressBar(
    /// Completion percentage, 0-100.
    #[prop(into)]
    percent: Signal<u8>,
) -> impl IntoView {
    view! {
        <div class="h-2 bg-gray-200 rounded-full overflow-hidden">
            <div
                class="h-full bg-orange-500 transition-all duration-300"
                style:width=move || format!("{}%", percent.get())
            ></div>
        </div>
    }
}
