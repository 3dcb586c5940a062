//! # Domain Model: Products and Wire Payloads
//!
//! Two shapes exist for the same record:
//!
//! - [`Product`]: a record as the remote catalog returns it. Identity is the
//!   `id`, an opaque string the server assigns on create. The client never
//!   invents or rewrites an id.
//! - [`ProductDraft`]: a `Product` minus the `id` — the body of a create
//!   (`POST`) or full-replace update (`PUT`).
//!
//! ## Price representation
//!
//! `price` is a [`Decimal`] and travels over the wire as decimal **text**
//! (`"19.99"`, not `19.99`). Currency must not drift through binary floating
//! point, and the remote serializes it as a string for the same reason.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    pub image: String,
    pub status: bool,
}

impl Product {
    /// The payload form of this product, for prefilling an edit form or
    /// issuing a full-replace update.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            stock: self.stock,
            image: self.image.clone(),
            status: self.status,
        }
    }
}

/// New-product or replacement payload. Carries every `Product` field except
/// the server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    pub image: String,
    pub status: bool,
}

impl ProductDraft {
    /// Checks the invariants a well-formed payload must satisfy before it is
    /// sent. The remote validates again; this catches the obvious cases
    /// without a round trip.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product name cannot be empty".to_string(),
            ));
        }
        if self.price.is_sign_negative() {
            return Err(CatalogError::Validation(format!(
                "price cannot be negative: {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Attaches a server-assigned id, producing the full record.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            stock: self.stock,
            image: self.image,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Walnut Desk".to_string(),
            description: "Solid walnut, 140cm".to_string(),
            price: "249.90".parse().unwrap(),
            category: "furniture".to_string(),
            stock: 12,
            image: "https://cdn.example.com/desk.jpg".to_string(),
            status: true,
        }
    }

    #[test]
    fn price_serializes_as_text() {
        let product = draft().into_product("prod-1");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!("249.90"));
    }

    #[test]
    fn price_parses_from_text() {
        let json = r#"{
            "id": "prod-9",
            "name": "Lamp",
            "description": "Desk lamp",
            "price": "10.50",
            "category": "lighting",
            "stock": 3,
            "image": "https://cdn.example.com/lamp.jpg",
            "status": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, "10.50".parse().unwrap());
        assert!(!product.status);
    }

    #[test]
    fn draft_round_trip_preserves_every_field() {
        let original = draft();
        let json = serde_json::to_string(&original).unwrap();
        let loaded: ProductDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn create_round_trip_differs_only_in_id() {
        let sent = draft();
        // The server echoes the payload back with an id attached.
        let received = sent.clone().into_product("prod-42");
        assert_eq!(received.draft(), sent);
        assert_eq!(received.id, "prod-42");
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(matches!(
            d.validate(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut d = draft();
        d.price = "-0.01".parse().unwrap();
        assert!(matches!(
            d.validate(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn validate_accepts_zero_price_and_zero_stock() {
        let mut d = draft();
        d.price = Decimal::ZERO;
        d.stock = 0;
        assert!(d.validate().is_ok());
    }
}
