//! Alert banners for success, error, and info messages.

use leptos::prelude::*;
use users_client::NotificationKind;

/// Supported alert styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<NotificationKind> for AlertKind {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => Self::Success,
            NotificationKind::Error => Self::Error,
            NotificationKind::Info => Self::Info,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "flex items-start justify-between gap-3 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-sm dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        AlertKind::Success => {
            "flex items-start justify-between gap-3 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-sm dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        AlertKind::Info => {
            "flex items-start justify-between gap-3 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 shadow-sm dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    };

    view! {
        <div class=class role="alert">
            <span>{message}</span>
            {children.map(|children| children())}
        </div>
    }
}
