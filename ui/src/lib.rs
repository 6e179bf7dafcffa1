// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use api::currency::Currency;
use api::storage::SharedStore;
use components::base::Container;
use dioxus_logger::tracing;
use screens::catalog::CatalogScreen;
use screens::my_orders::MyOrdersScreen;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Enum to represent the navigable views of the shop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    Products,
    #[default]
    Orders,
}

impl View {
    /// Helper to get the display name for each view.
    pub fn name(&self) -> &'static str {
        match self {
            View::Products => "Productos",
            View::Orders => "Mis Pedidos",
        }
    }
}

/// A list of all navigable views for easy iteration.
const ALL_VIEWS: [View; 2] = [View::Products, View::Orders];

/// A navigation request raised by a screen: a destination view plus an
/// optional free-form payload the destination interprets.
#[derive(Clone, PartialEq, Debug)]
pub struct NavRequest {
    pub view: View,
    pub payload: Option<String>,
}

impl NavRequest {
    pub fn to(view: View) -> Self {
        Self {
            view,
            payload: None,
        }
    }

    pub fn with_payload(view: View, payload: impl Into<String>) -> Self {
        Self {
            view,
            payload: Some(payload.into()),
        }
    }
}

/// The storage port handed to screens via context. In the browser this is
/// `localStorage`; anywhere else (tests, SSR) an empty in-memory store.
#[cfg(target_arch = "wasm32")]
fn default_store() -> SharedStore {
    SharedStore::new(api::storage::BrowserStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> SharedStore {
    SharedStore::new(api::storage::MemoryStore::new())
}

/// Compact chooser for the active display currency.
#[component]
fn CurrencySelect(currency: Signal<Currency>) -> Element {
    rsx! {
        select {
            class: "currency-select",
            "aria-label": "Moneda",
            onchange: move |event| match Currency::from_str(&event.value()) {
                Ok(selected) => currency.set(selected),
                Err(_) => tracing::warn!("unknown currency code: {}", event.value()),
            },
            for choice in Currency::iter() {
                option {
                    value: choice.code(),
                    selected: choice == currency(),
                    title: choice.name(),
                    "{choice.code()}"
                }
            }
        }
    }
}

/// The shop's top navigation tabs.
#[component]
fn ViewTabs(active_view: Signal<View>) -> Element {
    rsx! {
        ul {
            class: "view-tabs",
            for view in ALL_VIEWS {
                li {
                    a {
                        href: "#",
                        class: if *active_view.read() == view { "active-tab" } else { "" },
                        "aria-current": if *active_view.read() == view { "page" } else { "false" },
                        onclick: move |event| {
                            event.prevent_default();
                            active_view.set(view);
                        },
                        "{view.name()}"
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
        background-color: #faf7f5;
        color: #1f1f1f;
    }

    .container { max-width: 960px; margin: 0 auto; padding: 0 1rem; }

    header nav {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        padding: 1rem 0;
        border-bottom: 1px solid #e8e2de;
        flex-wrap: wrap;
    }
    .brand { margin: 0; font-size: 1.4rem; letter-spacing: 0.02em; }
    .view-tabs { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; flex: 1; }
    .view-tabs a { text-decoration: none; color: #8a817c; padding: 0.25rem 0; }
    .view-tabs a.active-tab { color: #1f1f1f; border-bottom: 2px solid #1f1f1f; }
    .currency-select { border: 1px solid #e8e2de; border-radius: 8px; padding: 0.25rem 0.5rem; background: #fff; }

    .content { padding: 2rem 0 3rem; }
    .screen-title { font-size: 1.8rem; margin: 0 0 1.5rem; }
    .card { background: #fff; border: 1px solid #e8e2de; border-radius: 12px; padding: 1.5rem; }

    .order-card {
        background: #fff;
        border: 1px solid #e8e2de;
        border-radius: 12px;
        overflow: hidden;
        margin-bottom: 1.5rem;
    }
    .order-card-header {
        background: #f7f2ef;
        border-bottom: 1px solid #e8e2de;
        padding: 1rem 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .order-fields { display: flex; gap: 2rem; flex-wrap: wrap; }
    .order-field-label {
        margin: 0;
        font-size: 0.7rem;
        font-weight: 700;
        text-transform: uppercase;
        color: #8a817c;
    }
    .order-field-value { margin: 0; font-size: 0.9rem; font-weight: 600; }
    .order-field-value.order-id { font-family: monospace; font-weight: 400; }

    .status-badge {
        display: inline-flex;
        align-items: center;
        border-radius: 999px;
        padding: 0.15rem 0.7rem;
        font-size: 0.75rem;
        font-weight: 600;
    }
    .status-badge-positive { background: #dcf5e3; color: #1d6b3a; }
    .status-badge-neutral { background: #e3edfa; color: #1d4f8a; }

    .order-card-body { padding: 1.5rem; display: flex; gap: 1.5rem; flex-wrap: wrap; }
    .order-items { flex: 1; display: flex; flex-wrap: wrap; gap: 1rem; }
    .order-item { display: flex; align-items: center; gap: 0.8rem; min-width: 200px; }
    .order-item-thumb {
        width: 64px;
        height: 64px;
        border: 1px solid #f0ebe8;
        border-radius: 8px;
        background: #fff;
        object-fit: contain;
        padding: 2px;
        flex-shrink: 0;
    }
    .order-item-name {
        display: -webkit-box;
        -webkit-line-clamp: 2;
        -webkit-box-orient: vertical;
        overflow: hidden;
        font-size: 0.9rem;
        font-weight: 600;
        margin: 0;
    }
    .order-item-qty { margin: 0; font-size: 0.78rem; color: #8a817c; }

    .order-actions {
        display: flex;
        flex-direction: column;
        justify-content: center;
        gap: 0.75rem;
        border-left: 1px solid #f0ebe8;
        padding-left: 1.5rem;
    }
    .help-link { color: #8a817c; font-size: 0.85rem; text-align: center; text-decoration: none; }
    .help-link:hover { color: #1f1f1f; }

    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        background: #fff;
        border: 1px solid #e8e2de;
        border-radius: 18px;
        padding: 3rem 2rem;
        max-width: 540px;
        margin: 2rem auto;
    }
    .empty-state-icon { width: 64px; height: 64px; color: #d4cbc5; margin-bottom: 1rem; }
    .empty-state h2 { margin: 0 0 0.5rem; font-size: 1.4rem; }
    .empty-state p { margin: 0 auto 1.5rem; color: #8a817c; max-width: 400px; }

    button.primary {
        background: #1f1f1f;
        color: #fff;
        font-weight: 700;
        border: none;
        border-radius: 999px;
        padding: 0.75rem 2rem;
        cursor: pointer;
    }
    button.primary:hover { background: #3d3d3d; }
    button.outline {
        background: transparent;
        color: #1f1f1f;
        border: 1px solid #1f1f1f;
        border-radius: 8px;
        padding: 0.5rem 1rem;
        font-size: 0.85rem;
        font-weight: 600;
        cursor: pointer;
    }
    button.outline:hover { background: #f7f2ef; }
"#;

    // App-wide context: the storage port and the active display currency.
    use_context_provider(default_store);
    let currency = use_signal(Currency::default);
    use_context_provider(|| currency);

    let active_view = use_signal(View::default);

    // The navigation collaborator handed to screens. Screens only raise
    // requests; the shell decides what switching views means.
    let on_navigate = EventHandler::new(move |request: NavRequest| {
        tracing::debug!(
            "navigate to {:?} (payload: {:?})",
            request.view,
            request.payload
        );
        let mut active_view = active_view;
        active_view.set(request.view);
    });

    rsx! {
        style { "{app_css}" }
        Container {
            header {
                nav {
                    h1 { class: "brand", "Vella Perfumería" }
                    ViewTabs { active_view }
                    CurrencySelect { currency }
                }
            }
            div {
                class: "content",
                match active_view() {
                    View::Products => rsx! {
                        CatalogScreen {}
                    },
                    View::Orders => rsx! {
                        MyOrdersScreen { on_navigate }
                    },
                }
            }
        }
    }
}
