//! Client dashboard page

use crate::components::ApplicationCard;
use leptos::*;
use tm_core::pricing::format_inr;
use tm_core::records::{
    sample_applications, sample_notifications, Notification, NotificationKind, PaymentStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Applications,
    Notifications,
    Payments,
    Profile,
    Settings,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Applications,
        Tab::Notifications,
        Tab::Payments,
        Tab::Profile,
        Tab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Applications => "My Applications",
            Tab::Notifications => "Notifications",
            Tab::Payments => "Payments",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Applications => "📋",
            Tab::Notifications => "🔔",
            Tab::Payments => "💳",
            Tab::Profile => "👤",
            Tab::Settings => "⚙️",
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::Applications);

    view! {
        <div class="flex flex-col md:flex-row gap-6">
            // Sidebar
            <aside class="md:w-64 flex-shrink-0">
                <div class="bg-white rounded-lg shadow-md p-4">
                    <nav class="space-y-1">
                        {Tab::ALL
                            .iter()
                            .map(|&tab| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab.get() == tab {
                                                "w-full flex items-center px-4 py-3 rounded-lg bg-orange-50 text-orange-600 font-medium"
                                            } else {
                                                "w-full flex items-center px-4 py-3 rounded-lg text-gray-700 hover:bg-gray-50"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(tab)
                                    >
                                        <span class="mr-3">{tab.icon()}</span>
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </aside>

            // Content
            <div class="flex-1">
                {move || match active_tab.get() {
                    Tab::Applications => view! { <ApplicationsTab/> }.into_view(),
                    Tab::Notifications => view! { <NotificationsTab/> }.into_view(),
                    Tab::Payments => view! { <PaymentsTab/> }.into_view(),
                    Tab::Profile => view! { <PlaceholderTab title="Profile"/> }.into_view(),
                    Tab::Settings => view! { <PlaceholderTab title="Settings"/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ApplicationsTab() -> impl IntoView {
    let applications = sample_applications();

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-900">"My Applications"</h1>
                <a
                    href="/register"
                    class="bg-orange-500 hover:bg-orange-600 text-white px-4 py-2 rounded-lg text-sm font-medium"
                >
                    "+ New Registration"
                </a>
            </div>
            {applications
                .into_iter()
                .map(|application| view! { <ApplicationCard application=application/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let notifications = sample_notifications();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">"Notifications"</h1>
            <div class="bg-white rounded-lg shadow-md divide-y divide-gray-100">
                <For
                    each=move || notifications.clone()
                    key=|n| n.id.clone()
                    children=move |notification: Notification| {
                        view! {
                            <div class="p-4 flex items-start">
                                <span class=notification_icon_class(notification.kind)>
                                    {notification_icon(notification.kind)}
                                </span>
                                <div class="ml-4 flex-1">
                                    <div class="flex justify-between">
                                        <h3 class="font-semibold text-gray-900">
                                            {notification.title.clone()}
                                        </h3>
                                        <span class="text-sm text-gray-400">
                                            {notification.date.to_string()}
                                        </span>
                                    </div>
                                    <p class="text-gray-600 text-sm mt-1">
                                        {notification.message.clone()}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Urgent => "⚠️",
        NotificationKind::Payment => "💳",
        NotificationKind::Info => "ℹ️",
        NotificationKind::Success => "✅",
    }
}

fn notification_icon_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Urgent => {
            "w-10 h-10 bg-red-100 rounded-full flex items-center justify-center flex-shrink-0"
        }
        NotificationKind::Payment => {
            "w-10 h-10 bg-orange-100 rounded-full flex items-center justify-center flex-shrink-0"
        }
        NotificationKind::Info => {
            "w-10 h-10 bg-blue-100 rounded-full flex items-center justify-center flex-shrink-0"
        }
        NotificationKind::Success => {
            "w-10 h-10 bg-green-100 rounded-full flex items-center justify-center flex-shrink-0"
        }
    }
}

#[component]
fn PaymentsTab() -> impl IntoView {
    // Flatten every payment across applications into one history table.
    let rows: Vec<_> = sample_applications()
        .into_iter()
        .flat_map(|app| {
            let app_name = app.name.clone();
            app.payments
                .into_iter()
                .map(move |payment| (app_name.clone(), payment))
        })
        .collect();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">"Payment History"</h1>
            <div class="bg-white rounded-lg shadow-md overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Application"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Description"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Date"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Amount"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {rows
                            .into_iter()
                            .map(|(app_name, payment)| {
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">
                                            {app_name}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                            {payment.description.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {payment.date.to_string()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            "₹" {format_inr(payment.amount)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            {match payment.status {
                                                PaymentStatus::Paid => view! {
                                                    <span class="px-2 py-1 text-xs font-medium rounded-full bg-green-100 text-green-800">
                                                        "Paid"
                                                    </span>
                                                }.into_view(),
                                                PaymentStatus::Pending => view! {
                                                    <button class="px-3 py-1 text-xs font-medium rounded-lg bg-orange-500 hover:bg-orange-600 text-white">
                                                        "Pay Now"
                                                    </button>
                                                }.into_view(),
                                            }}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn PlaceholderTab(title: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            <div class="bg-white rounded-lg shadow-md p-12 text-center text-gray-500">
                <p class="text-4xl mb-4">"🚧"</p>
                <p>"This section is under development."</p>
            </div>
        </div>
    }
}
