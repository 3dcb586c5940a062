//! # Catalog Layer
//!
//! The remote catalog service is the sole source of truth for product
//! records. This module defines the client abstraction the rest of the
//! engine depends on; everything above it sees only the request/response
//! contract, never a transport.
//!
//! ## Contract
//!
//! | Operation | Wire form | Notes |
//! |-----------|-----------|-------|
//! | List      | `GET /products?page&limit[&search]` | `search` omitted when empty |
//! | Get one   | `GET /products/{id}` | 404 on unknown id |
//! | Create    | `POST /products` | body is a [`ProductDraft`]; server assigns the id |
//! | Update    | `PUT /products/{id}` | full-replace semantics |
//! | Delete    | `DELETE /products/{id}` | returns a [`DeleteReceipt`] |
//!
//! `price` travels as decimal text in every body, requests and responses
//! alike.
//!
//! ## Implementations
//!
//! - [`http::HttpCatalog`]: production client over blocking HTTP.
//! - [`memory::InMemoryCatalog`]: for testing logic without a network.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Product, ProductDraft};

pub mod http;
pub mod memory;

/// Parameters for the list operation. The remote paginates server-side;
/// the engine typically asks for one generous page and filters client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based.
    pub page: usize,
    pub limit: usize,
    /// Server-side search term; `None` (or empty) is omitted from the request.
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
        }
    }
}

impl ListQuery {
    /// The first `limit` products, no search.
    pub fn first(limit: usize) -> Self {
        Self {
            page: 1,
            limit,
            search: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Body of a successful delete response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub message: String,
}

/// Abstract interface to the remote catalog.
///
/// Mutating operations take `&mut self`: a caller holds exactly one mutation
/// in flight at a time, which is what the cache-invalidation protocol in the
/// session layer assumes.
pub trait CatalogClient {
    /// Fetch a page of products.
    fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>>;

    /// Fetch a single product by id.
    fn get_product(&self, id: &str) -> Result<Product>;

    /// Create a product; the returned record carries the server-assigned id.
    fn create_product(&mut self, draft: &ProductDraft) -> Result<Product>;

    /// Replace an existing product wholesale.
    fn update_product(&mut self, id: &str, draft: &ProductDraft) -> Result<Product>;

    /// Remove a product by id.
    fn delete_product(&mut self, id: &str) -> Result<DeleteReceipt>;
}
