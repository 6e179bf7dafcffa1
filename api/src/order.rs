//! The past-order records the shop persists in the browser.
//!
//! These types mirror the stored JSON exactly; this crate only ever reads
//! them. The rest of the application owns the write path.

use serde::Deserialize;
use serde::Serialize;

/// A product referenced by a cart line entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub image_url: String,
}

/// A cart line entry inside an order: a product plus a quantity.
///
/// The quantity comes from storage as-is and is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// A completed purchase record.
///
/// `date` is a display string and is never parsed; ordering of the list is
/// derived from storage insertion order, not from this field. `status` is
/// free text, and `payment_method` is carried along but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub date: String,
    pub total: f64,
    pub status: String,
    pub items: Vec<CartItem>,
    pub payment_method: String,
}

impl Order {
    /// The visual treatment of this order's status badge.
    pub fn badge_variant(&self) -> BadgeVariant {
        BadgeVariant::from_status(&self.status)
    }
}

/// Visual treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum BadgeVariant {
    Positive,
    Neutral,
}

impl BadgeVariant {
    /// Selects the badge variant by exact string match. Only the two
    /// terminal statuses get the positive treatment; anything else,
    /// including case variants, is neutral.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Completado" | "Verificado" => Self::Positive,
            _ => Self::Neutral,
        }
    }
}

const HELP_CONTACT_PHONE: &str = "34661202616";

/// Builds the support-contact link for an order.
///
/// The order id is interpolated into the fixed WhatsApp message template
/// as-is; ids are opaque strings produced by the shop itself.
pub fn order_help_url(order_id: &str) -> String {
    format!(
        "https://api.whatsapp.com/send?phone={HELP_CONTACT_PHONE}&text=Hola,%20tengo%20una%20duda%20sobre%20mi%20pedido%20{order_id}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_get_the_positive_badge() {
        assert_eq!(BadgeVariant::from_status("Completado"), BadgeVariant::Positive);
        assert_eq!(BadgeVariant::from_status("Verificado"), BadgeVariant::Positive);
    }

    #[test]
    fn every_other_status_is_neutral() {
        assert_eq!(BadgeVariant::from_status("Pendiente"), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::from_status("Enviado"), BadgeVariant::Neutral);
        // match is exact: case variants and the empty string stay neutral
        assert_eq!(BadgeVariant::from_status("completado"), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::from_status("VERIFICADO"), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::from_status(""), BadgeVariant::Neutral);
    }

    #[test]
    fn help_url_interpolates_the_order_id_verbatim() {
        let url = order_help_url("VP-2024-0042");
        assert_eq!(
            url,
            "https://api.whatsapp.com/send?phone=34661202616&text=Hola,%20tengo%20una%20duda%20sobre%20mi%20pedido%20VP-2024-0042"
        );
    }

    #[test]
    fn order_decodes_from_the_stored_wire_format() {
        let raw = r#"{
            "id": "A1",
            "date": "2024-01-01",
            "total": 25.5,
            "status": "Pendiente",
            "items": [{"product": {"name": "X", "imageUrl": "x.png"}, "quantity": 2}],
            "paymentMethod": "card"
        }"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, "A1");
        assert_eq!(order.total, 25.5);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product.image_url, "x.png");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.payment_method, "card");
        assert!(order.badge_variant().is_neutral());
    }
}
