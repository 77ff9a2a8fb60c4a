//! Dashboard display records
//!
//! Mock applications, documents, payments, and notifications shown on
//! the client dashboard. These are fixtures only; nothing in the product
//! creates or mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    InProgress,
    Completed,
    Objected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::InProgress => "In Progress",
            ApplicationStatus::Completed => "Completed",
            ApplicationStatus::Objected => "Objected",
        }
    }

    /// Rough lifecycle progress shown on the application card. An
    /// objection means the application got further than one still in
    /// progress, hence 75.
    pub fn progress_percent(&self) -> u8 {
        match self {
            ApplicationStatus::Pending => 25,
            ApplicationStatus::InProgress => 50,
            ApplicationStatus::Objected => 75,
            ApplicationStatus::Completed => 100,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Verified,
    Pending,
    Missing,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Missing => "Missing",
        }
    }

    /// Longer form used in the document checklist.
    pub fn detail_label(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Pending => "Pending Verification",
            DocumentStatus::Missing => "Required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub name: String,
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: u32,
    pub date: NaiveDate,
    pub description: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: ApplicationStatus,
    pub date_updated: NaiveDate,
    pub documents: Vec<DocumentRecord>,
    pub payments: Vec<PaymentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Urgent,
    Payment,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub kind: NotificationKind,
}

fn document(name: &str, status: DocumentStatus) -> DocumentRecord {
    DocumentRecord {
        name: name.to_string(),
        status,
    }
}

fn payment(amount: u32, date: NaiveDate, description: &str, status: PaymentStatus) -> PaymentRecord {
    PaymentRecord {
        amount,
        date,
        description: description.to_string(),
        status,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Fixture dates are compile-time constants; all are valid.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// The three demo applications shown on every dashboard.
pub fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".to_string(),
            name: "TechNova".to_string(),
            kind: "Trademark".to_string(),
            status: ApplicationStatus::Pending,
            date_updated: date(2023, 12, 10),
            documents: vec![
                document("ID Proof", DocumentStatus::Verified),
                document("Business Proof", DocumentStatus::Pending),
                document("Authorization Letter", DocumentStatus::Missing),
            ],
            payments: vec![
                payment(12999, date(2023, 12, 1), "Initial Payment", PaymentStatus::Paid),
                payment(4500, date(2024, 2, 15), "Government Fee", PaymentStatus::Pending),
            ],
        },
        Application {
            id: "2".to_string(),
            name: "EcoFresh".to_string(),
            kind: "Trademark".to_string(),
            status: ApplicationStatus::InProgress,
            date_updated: date(2023, 11, 20),
            documents: vec![
                document("ID Proof", DocumentStatus::Verified),
                document("Business Proof", DocumentStatus::Verified),
                document("Logo File", DocumentStatus::Verified),
            ],
            payments: vec![payment(
                7999,
                date(2023, 11, 15),
                "Initial Payment",
                PaymentStatus::Paid,
            )],
        },
        Application {
            id: "3".to_string(),
            name: "CloudServe Solutions".to_string(),
            kind: "Company Registration".to_string(),
            status: ApplicationStatus::Completed,
            date_updated: date(2023, 10, 5),
            documents: vec![
                document("Director ID Proof", DocumentStatus::Verified),
                document("Address Proof", DocumentStatus::Verified),
                document("NOC", DocumentStatus::Verified),
            ],
            payments: vec![
                payment(8999, date(2023, 9, 20), "Initial Payment", PaymentStatus::Paid),
                payment(2500, date(2023, 9, 30), "Government Fee", PaymentStatus::Paid),
            ],
        },
    ]
}

/// The four demo notifications.
pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "Document Required".to_string(),
            message: "Please upload the business proof for TechNova trademark application."
                .to_string(),
            date: date(2023, 12, 12),
            kind: NotificationKind::Urgent,
        },
        Notification {
            id: "2".to_string(),
            title: "Payment Due".to_string(),
            message: "Government fee of ₹4,500 is pending for TechNova trademark application."
                .to_string(),
            date: date(2023, 12, 10),
            kind: NotificationKind::Payment,
        },
        Notification {
            id: "3".to_string(),
            title: "Status Update".to_string(),
            message: "Your EcoFresh trademark application has been examined by the Registrar."
                .to_string(),
            date: date(2023, 12, 5),
            kind: NotificationKind::Info,
        },
        Notification {
            id: "4".to_string(),
            title: "Registration Complete".to_string(),
            message: "CloudServe Solutions company registration has been completed.".to_string(),
            date: date(2023, 10, 5),
            kind: NotificationKind::Success,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let apps = sample_applications();
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0].status, ApplicationStatus::Pending);
        assert_eq!(apps[1].status, ApplicationStatus::InProgress);
        assert_eq!(apps[2].status, ApplicationStatus::Completed);
        for app in &apps {
            assert_eq!(app.documents.len(), 3);
            assert!(!app.payments.is_empty());
        }
    }

    #[test]
    fn test_pending_payment_exists() {
        let apps = sample_applications();
        let pending: Vec<_> = apps
            .iter()
            .flat_map(|a| &a.payments)
            .filter(|p| p.status == PaymentStatus::Pending)
            .collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].amount, 4500);
    }

    #[test]
    fn test_progress_tracks_lifecycle() {
        assert_eq!(ApplicationStatus::Pending.progress_percent(), 25);
        assert_eq!(ApplicationStatus::InProgress.progress_percent(), 50);
        assert_eq!(ApplicationStatus::Objected.progress_percent(), 75);
        assert_eq!(ApplicationStatus::Completed.progress_percent(), 100);
    }

    #[test]
    fn test_status_serde_tags() {
        let json = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: DocumentStatus = serde_json::from_str("\"missing\"").unwrap();
        assert_eq!(back, DocumentStatus::Missing);
    }

    #[test]
    fn test_notifications_cover_all_kinds() {
        let kinds: Vec<NotificationKind> =
            sample_notifications().iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::Urgent,
                NotificationKind::Payment,
                NotificationKind::Info,
                NotificationKind::Success,
            ]
        );
    }
}
