//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic product inventory engine**. It owns the
//! client-side half of an admin inventory screen: fetching the catalog,
//! deriving the visible page from filter/sort/pagination state, and
//! coordinating mutations against the remote service. It renders nothing
//! and assumes no UI toolkit; any frontend can sit on top.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - The facade a UI talks to                                 │
//! │  - Owns the cached collection and the ViewState             │
//! │  - Coordinates mutations, invalidation, and page repair     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view/)                                         │
//! │  - Pure derivation: filter, then sort, then paginate        │
//! │  - No I/O, no failure, deterministic                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                   │
//! │  - Abstract CatalogClient trait                             │
//! │  - HttpCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the remote is the source of truth
//!
//! The session keeps a cached mirror of the remote collection and derives
//! every view from it. After any successful mutation the cache is
//! invalidated wholesale, never patched in place; the next read refetches.
//! The cost of a refetch is bounded, the cost of a divergent cache is not.
//!
//! ## Testing Strategy
//!
//! 1. **View** (`view/*.rs`): thorough unit tests of the pure pipeline.
//!    This is where the lion's share of testing lives.
//! 2. **Catalog** (`catalog/`): error-mapping tests for the HTTP client
//!    (network-free) and semantics tests for the in-memory double.
//! 3. **Session** (`session.rs` + `tests/`): full flows against
//!    [`catalog::memory::InMemoryCatalog`], including injected failures.
//!
//! ## Module Overview
//!
//! - [`session`]: The session facade, entry point for all operations
//! - [`view`]: Filter, sort, and pagination derivation
//! - [`catalog`]: Remote-catalog abstraction and implementations
//! - [`model`]: Core data types (`Product`, `ProductDraft`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod view;

pub use catalog::http::HttpCatalog;
pub use catalog::memory::InMemoryCatalog;
pub use catalog::{CatalogClient, DeleteReceipt, ListQuery};
pub use config::InventoryConfig;
pub use error::{CatalogError, Result};
pub use model::{Product, ProductDraft};
pub use session::{InventorySession, MutationStatus};
pub use view::filter::{CategoryFilter, ProductFilter, StatusFilter};
pub use view::page::PageLabel;
pub use view::sort::{SortField, SortOrder};
pub use view::{derive_view, DerivedView, ViewState};
