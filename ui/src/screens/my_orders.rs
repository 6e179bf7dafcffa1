//=============================================================================
// File: ui/src/screens/my_orders.rs
//=============================================================================
use api::currency::Currency;
use api::order::Order;
use api::order_store::load_past_orders;
use api::storage::SharedStore;
use dioxus::prelude::*;

use crate::components::base::Button;
use crate::components::empty_state::EmptyState;
use crate::components::order_card::OrderCard;
use crate::NavRequest;
use crate::View;

const ORDERS_EMPTY_SVG: &str = include_str!("../../assets/svg/orders-empty.svg");

/// The "Mis Pedidos" screen: the locally persisted purchase history,
/// newest first.
///
/// The screen holds a transient read-only copy of the stored list; the
/// rest of the application owns the store and its write path.
#[component]
pub fn MyOrdersScreen(on_navigate: EventHandler<NavRequest>) -> Element {
    let store = use_context::<SharedStore>();
    let currency = use_context::<Signal<Currency>>();
    let orders = use_signal(Vec::<Order>::new);

    // One store read per mount. The closure reads no signals, so the
    // effect never re-runs; a failed load has already collapsed to the
    // empty list inside `load_past_orders`.
    use_effect(move || {
        let mut orders = orders;
        orders.set(load_past_orders(&*store));
    });

    let order_list = orders.read();

    if order_list.is_empty() {
        return rsx! {
            EmptyState {
                title: "No tienes pedidos recientes".to_string(),
                description: Some("Parece que aún no has realizado ninguna compra.".to_string()),
                icon: rsx! {
                    span {
                        dangerous_inner_html: ORDERS_EMPTY_SVG,
                        style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                    }
                },
                primary_action: rsx! {
                    Button {
                        on_click: move |_| on_navigate.call(NavRequest::to(View::Products)),
                        "Empezar a Comprar"
                    }
                },
            }
        };
    }

    rsx! {
        h1 { class: "screen-title", "Mis Pedidos" }
        div {
            class: "order-list",
            for order in order_list.iter() {
                OrderCard {
                    key: "{order.id}",
                    order: order.clone(),
                    currency: currency(),
                    on_navigate,
                }
            }
        }
    }
}
