//! Reads the persisted past-order list.
//!
//! The shop appends each completed order to a single `localStorage` entry;
//! this module performs the one read the orders screen does on mount and
//! hands back the list newest-first.

use dioxus_logger::tracing;
use thiserror::Error;

use crate::order::Order;
use crate::storage::KeyValueStore;

/// The fixed key the shop writes completed orders under.
pub const PAST_ORDERS_KEY: &str = "vellaperfumeria_past_orders";

/// The one failure class of this module: the stored value exists but
/// cannot be decoded as an order list.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("stored order list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads and decodes the stored order list, reversed so the last-written
/// order comes first.
///
/// A missing key is not an error; it decodes to an empty list. The list is
/// returned exactly as stored apart from the reversal: no deduplication,
/// no normalization, and no parsing of the `date` strings.
pub fn read_past_orders(store: &dyn KeyValueStore) -> Result<Vec<Order>, OrderStoreError> {
    let Some(raw) = store.get(PAST_ORDERS_KEY) else {
        return Ok(Vec::new());
    };

    let mut orders: Vec<Order> = serde_json::from_str(&raw)?;
    orders.reverse();
    Ok(orders)
}

/// The recovering wrapper the orders screen calls on mount.
///
/// A malformed stored value is logged once and collapses to the empty
/// list; the screen cannot distinguish it from "no orders yet".
pub fn load_past_orders(store: &dyn KeyValueStore) -> Vec<Order> {
    match read_past_orders(store) {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!("failed to load past orders: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const TWO_ORDERS: &str = r#"[
        {"id":"A1","date":"2024-01-01","total":25.5,"status":"Pendiente",
         "items":[{"product":{"name":"X","imageUrl":"x.png"},"quantity":2}],
         "paymentMethod":"card"},
        {"id":"A2","date":"2024-02-01","total":10,"status":"Completado",
         "items":[],"paymentMethod":"cash"}
    ]"#;

    #[test]
    fn returns_the_stored_list_reversed() {
        let store = MemoryStore::with_entry(PAST_ORDERS_KEY, TWO_ORDERS);
        let orders = load_past_orders(&store);

        assert_eq!(orders.len(), 2);
        // last written comes first
        assert_eq!(orders[0].id, "A2");
        assert!(orders[0].badge_variant().is_positive());
        assert_eq!(orders[1].id, "A1");
        assert!(orders[1].badge_variant().is_neutral());
        assert_eq!(orders[1].items.len(), 1);
        assert_eq!(orders[1].items[0].quantity, 2);
    }

    #[test]
    fn missing_key_is_an_empty_list_not_an_error() {
        let store = MemoryStore::new();
        assert!(read_past_orders(&store).unwrap().is_empty());
    }

    #[test]
    fn malformed_content_errors_at_the_read_layer() {
        let store = MemoryStore::with_entry(PAST_ORDERS_KEY, "{not json");
        assert!(matches!(
            read_past_orders(&store),
            Err(OrderStoreError::Malformed(_))
        ));
    }

    #[test]
    fn malformed_content_recovers_to_an_empty_list() {
        let store = MemoryStore::with_entry(PAST_ORDERS_KEY, r#"{"orders": 1}"#);
        assert!(load_past_orders(&store).is_empty());
    }

    #[test]
    fn loading_performs_exactly_one_store_read() {
        let store = MemoryStore::with_entry(PAST_ORDERS_KEY, TWO_ORDERS);
        load_past_orders(&store);
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn preserves_item_order_within_an_order() {
        let raw = r#"[{"id":"B1","date":"2024-03-05","total":40,"status":"Enviado",
            "items":[
                {"product":{"name":"Agua de rosas","imageUrl":"rosas.png"},"quantity":1},
                {"product":{"name":"Jabón de lavanda","imageUrl":"lavanda.png"},"quantity":3}
            ],
            "paymentMethod":"card"}]"#;
        let store = MemoryStore::with_entry(PAST_ORDERS_KEY, raw);
        let orders = load_past_orders(&store);
        let names: Vec<&str> = orders[0]
            .items
            .iter()
            .map(|item| item.product.name.as_str())
            .collect();
        assert_eq!(names, ["Agua de rosas", "Jabón de lavanda"]);
    }
}
