//=============================================================================
// File: ui/src/components/order_card.rs
//=============================================================================
use api::currency::Currency;
use api::money::format_currency;
use api::order::order_help_url;
use api::order::CartItem;
use api::order::Order;
use dioxus::prelude::*;

use crate::components::base::Button;
use crate::components::base::ButtonType;
use crate::components::status_badge::StatusBadge;
use crate::NavRequest;
use crate::View;

/// One line of the order body: thumbnail, product name, quantity.
#[component]
fn OrderItemRow(item: CartItem) -> Element {
    rsx! {
        div {
            class: "order-item",
            img {
                class: "order-item-thumb",
                src: "{item.product.image_url}",
                alt: "{item.product.name}",
            }
            div {
                p { class: "order-item-name", "{item.product.name}" }
                p { class: "order-item-qty", "Cant: {item.quantity}" }
            }
        }
    }
}

/// A single past order: header with date, total, id and status badge;
/// body with the purchased items and the per-order actions.
#[component]
pub fn OrderCard(
    order: Order,
    currency: Currency,
    on_navigate: EventHandler<NavRequest>,
) -> Element {
    let total = format_currency(order.total, currency);
    let help_url = order_help_url(&order.id);

    rsx! {
        article {
            class: "order-card",

            // Order header
            div {
                class: "order-card-header",
                div {
                    class: "order-fields",
                    div {
                        p { class: "order-field-label", "Pedido realizado" }
                        p { class: "order-field-value", "{order.date}" }
                    }
                    div {
                        p { class: "order-field-label", "Total" }
                        p { class: "order-field-value", "{total}" }
                    }
                    div {
                        p { class: "order-field-label", "Pedido N.º" }
                        p { class: "order-field-value order-id", "{order.id}" }
                    }
                }
                StatusBadge { status: order.status.clone() }
            }

            // Order body
            div {
                class: "order-card-body",
                div {
                    class: "order-items",
                    for (idx, item) in order.items.iter().enumerate() {
                        OrderItemRow {
                            key: "{order.id}-{idx}",
                            item: item.clone(),
                        }
                    }
                }
                div {
                    class: "order-actions",
                    Button {
                        button_type: ButtonType::Outline,
                        on_click: move |_| {
                            on_navigate.call(NavRequest::with_payload(View::Products, "all"));
                        },
                        "Volver a comprar"
                    }
                    a {
                        class: "help-link",
                        href: "{help_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Ayuda con el pedido"
                    }
                }
            }
        }
    }
}
