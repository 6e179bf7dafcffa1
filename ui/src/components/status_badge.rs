// File: ui/src/components/status_badge.rs
use api::order::BadgeVariant;
use dioxus::prelude::*;

/// Pill-shaped badge for an order's status label.
///
/// The visual variant is chosen by exact match on the status text; the
/// text itself is rendered as stored.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let variant_class = match BadgeVariant::from_status(&status) {
        BadgeVariant::Positive => "status-badge status-badge-positive",
        BadgeVariant::Neutral => "status-badge status-badge-neutral",
    };

    rsx! {
        span { class: "{variant_class}", "{status}" }
    }
}
