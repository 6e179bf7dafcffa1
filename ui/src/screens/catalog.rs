//=============================================================================
// File: ui/src/screens/catalog.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::base::Card;

/// Landing view for the product catalog.
///
/// The catalog itself is served by the main storefront; this view is the
/// navigation target the orders screen sends shoppers back to.
#[component]
pub fn CatalogScreen() -> Element {
    rsx! {
        Card {
            h3 { "Productos" }
            p { "Explora el catálogo completo en la tienda." }
        }
    }
}
