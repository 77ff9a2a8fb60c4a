//! Application card with expandable document and payment details

use crate::components::ProgressBar;
use leptos::*;
use tm_core::records::{Application, ApplicationStatus, DocumentStatus, PaymentStatus};
use tm_core::pricing::format_inr;

#[component]
pub fn ApplicationCard(application: Application) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let status = application.status;
    let progress = Signal::derive(move || status.progress_percent());

    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
            <div class="p-6">
                <div class="flex justify-between items-start">
                    <div>
                        <div class="flex items-center">
                            <h2 class="text-xl font-bold mr-3">{application.name.clone()}</h2>
                            <StatusBadge status=status/>
                        </div>
                        <p class="text-gray-500 mt-1">{application.kind.clone()}</p>
                    </div>
                    <span class="text-sm text-gray-500">
                        "Updated: " {application.date_updated.to_string()}
                    </span>
                </div>

                <div class="mt-4">
                    <div class="flex justify-between mb-1">
                        <span class="text-sm font-medium text-gray-700">"Progress"</span>
                        <span class="text-sm font-medium text-gray-700">
                            {move || format!("{}%", progress.get())}
                        </span>
                    </div>
                    <ProgressBar percent=progress/>
                </div>

                <button
                    class="w-full mt-4 py-2 text-sm text-gray-600 hover:text-gray-900 flex items-center justify-center"
                    on:click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    {move || if expanded.get() { "Hide Details ▲" } else { "View Details ▼" }}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="border-t border-gray-200 p-6">
                    // Documents
                    <div class="mb-6">
                        <h3 class="text-lg font-semibold mb-3">"Required Documents"</h3>
                        <div class="space-y-3">
                            {application
                                .documents
                                .iter()
                                .map(|doc| {
                                    let status = doc.status;
                                    view! {
                                        <div class="flex justify-between items-center border-b border-gray-100 pb-2">
                                            <span class="text-gray-700">"📄 " {doc.name.clone()}</span>
                                            <span class=document_status_class(status)>
                                                {status.detail_label()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Payments
                    <div>
                        <h3 class="text-lg font-semibold mb-3">"Payments"</h3>
                        <div class="space-y-2">
                            {application
                                .payments
                                .iter()
                                .map(|payment| {
                                    let status = payment.status;
                                    view! {
                                        <div class="flex justify-between items-center text-sm">
                                            <span class="text-gray-700">
                                                {payment.description.clone()}
                                                <span class="text-gray-400 ml-2">{payment.date.to_string()}</span>
                                            </span>
                                            <span class="flex items-center">
                                                <span class="mr-3">"₹" {format_inr(payment.amount)}</span>
                                                <PaymentBadge status=status/>
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    let color = match status {
        ApplicationStatus::Pending => "bg-yellow-100 text-yellow-800",
        ApplicationStatus::InProgress => "bg-blue-100 text-blue-800",
        ApplicationStatus::Completed => "bg-green-100 text-green-800",
        ApplicationStatus::Objected => "bg-red-100 text-red-800",
    };

    view! {
        <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", color)>
            {status.label()}
        </span>
    }
}

#[component]
fn PaymentBadge(status: PaymentStatus) -> impl IntoView {
    let (color, text) = match status {
        PaymentStatus::Paid => ("bg-green-100 text-green-800", "Paid"),
        PaymentStatus::Pending => ("bg-orange-100 text-orange-800", "Pending"),
    };

    view! {
        <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", color)>
            {text}
        </span>
    }
}

fn document_status_class(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Verified => "text-sm text-green-600",
        DocumentStatus::Pending => "text-sm text-yellow-600",
        DocumentStatus::Missing => "text-sm text-red-600",
    }
}
