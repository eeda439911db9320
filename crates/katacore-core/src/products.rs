//! Placeholder product catalogue.
//!
//! The list is hard-coded; there is no store behind it.

use serde::Serialize;

/// A product shown on the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Price in whole US dollars.
    pub price: u32,
    pub image: &'static str,
}

impl Product {
    /// Price as shown in listings.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// The demo products.
#[must_use]
pub fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop",
            price: 999,
            image: "/laptop.jpg",
        },
        Product {
            id: 2,
            name: "Phone",
            price: 499,
            image: "/phone.jpg",
        },
    ]
}
