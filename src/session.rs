//! # Inventory Session
//!
//! The facade every UI talks to, and the owner of the only mutable state in
//! the engine: the cached product collection and the [`ViewState`]. It
//! dispatches mutations to the catalog client, tracks their status, and
//! keeps the derived view consistent with the remote source of truth.
//!
//! ## Cache discipline
//!
//! The cached collection is a wholesale mirror of the remote: it is replaced
//! in full on every fetch and *invalidated* — never patched in place — after
//! every successful mutation. The remote may apply defaults or transforms
//! the client cannot predict, so a local patch risks silent divergence; a
//! refetch cannot.
//!
//! ## Failure discipline
//!
//! A failed mutation changes nothing: the cache, the view state, and the
//! current page are exactly as they were before the attempt. The error is
//! returned with a human-readable message and is never retried here; retry
//! is the caller's decision.

use log::{debug, warn};

use crate::catalog::{CatalogClient, ListQuery};
use crate::config::InventoryConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductDraft};
use crate::view::filter::{CategoryFilter, StatusFilter};
use crate::view::sort::{SortField, SortOrder};
use crate::view::{derive_view, DerivedView, ViewState};

const DEFAULT_FETCH_LIMIT: usize = 100;

/// Lifecycle of the most recent mutation of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(String),
}

/// One interactive session over the product catalog.
///
/// Generic over [`CatalogClient`] so the same session logic runs against the
/// HTTP client in production and [`crate::catalog::memory::InMemoryCatalog`]
/// in tests.
pub struct InventorySession<C: CatalogClient> {
    catalog: C,
    cache: Option<Vec<Product>>,
    state: ViewState,
    fetch_limit: usize,
    create_status: MutationStatus,
    update_status: MutationStatus,
    delete_status: MutationStatus,
}

impl<C: CatalogClient> InventorySession<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            cache: None,
            state: ViewState::default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            create_status: MutationStatus::Idle,
            update_status: MutationStatus::Idle,
            delete_status: MutationStatus::Idle,
        }
    }

    pub fn with_config(catalog: C, config: &InventoryConfig) -> Self {
        let mut session = Self::new(catalog);
        session.state.items_per_page = config.items_per_page.max(1);
        session.fetch_limit = config.fetch_limit.max(1);
        session
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Direct access to the underlying client. Going around the session does
    /// not touch the cache; callers normally only need this to wire up test
    /// doubles.
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn create_status(&self) -> &MutationStatus {
        &self.create_status
    }

    pub fn update_status(&self) -> &MutationStatus {
        &self.update_status
    }

    pub fn delete_status(&self) -> &MutationStatus {
        &self.delete_status
    }

    // --- Reads ---

    /// The current derived view, refetching the collection first if the
    /// cache has been invalidated.
    pub fn view(&mut self) -> Result<DerivedView> {
        self.ensure_cache()?;
        let products = self.cache.as_deref().unwrap_or(&[]);
        Ok(derive_view(products, &self.state))
    }

    pub fn get_product(&self, id: &str) -> Result<Product> {
        self.catalog.get_product(id)
    }

    /// Discards the cached collection; the next read refetches.
    pub fn invalidate(&mut self) {
        debug!("invalidating cached collection");
        self.cache = None;
    }

    /// Forces a refetch now.
    pub fn refresh(&mut self) -> Result<()> {
        self.invalidate();
        self.ensure_cache()
    }

    fn ensure_cache(&mut self) -> Result<()> {
        if self.cache.is_none() {
            let query = ListQuery::first(self.fetch_limit);
            let products = self.catalog.list_products(&query)?;
            debug!("fetched {} products", products.len());
            self.cache = Some(products);
        }
        Ok(())
    }

    // --- View state interaction ---

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.set_search(term);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.set_category(category);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.state.set_status(status);
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.state.set_sort(field, order);
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.state.toggle_sort(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn prev_page(&mut self) {
        self.state.set_page(self.state.current_page.saturating_sub(1));
    }

    /// Advances one page, clamped to the last page of the current view.
    pub fn next_page(&mut self) -> Result<()> {
        let total_pages = self.view()?.total_pages;
        let next = (self.state.current_page + 1).min(total_pages.max(1));
        self.state.set_page(next);
        Ok(())
    }

    // --- Mutations ---

    /// Creates a product. On success the cache is invalidated and the
    /// server-built record (with its assigned id) is returned.
    pub fn create(&mut self, draft: &ProductDraft) -> Result<Product> {
        if let Err(err) = draft.validate() {
            self.create_status = MutationStatus::Failure(err.to_string());
            return Err(err);
        }
        self.create_status = MutationStatus::Pending;
        match self.catalog.create_product(draft) {
            Ok(product) => {
                self.invalidate();
                self.create_status = MutationStatus::Success;
                Ok(product)
            }
            Err(err) => {
                warn!("create failed: {err}");
                self.create_status = MutationStatus::Failure(err.to_string());
                Err(err)
            }
        }
    }

    /// Replaces the product with `id` wholesale. A `NotFound` answer means
    /// the local view is stale, so the cache is invalidated even though the
    /// mutation failed.
    pub fn update(&mut self, id: &str, draft: &ProductDraft) -> Result<Product> {
        if let Err(err) = draft.validate() {
            self.update_status = MutationStatus::Failure(err.to_string());
            return Err(err);
        }
        self.update_status = MutationStatus::Pending;
        match self.catalog.update_product(id, draft) {
            Ok(product) => {
                self.invalidate();
                self.update_status = MutationStatus::Success;
                Ok(product)
            }
            Err(err) => {
                warn!("update of {id} failed: {err}");
                if matches!(err, CatalogError::NotFound(_)) {
                    self.invalidate();
                }
                self.update_status = MutationStatus::Failure(err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes the product with `id`. On success the cache is invalidated
    /// and the page position is repaired: if the deleted item was the sole
    /// item on the current page and that page is not the first, the view
    /// moves back one page so the user never lands on an empty trailing
    /// page.
    ///
    /// Idempotent from the caller's view: a `NotFound` answer means the
    /// product was already deleted elsewhere and is treated as success,
    /// with the same invalidation and repair.
    pub fn delete(&mut self, id: &str) -> Result<String> {
        self.ensure_cache()?;
        let sole_item_on_page = {
            let products = self.cache.as_deref().unwrap_or(&[]);
            let page = derive_view(products, &self.state);
            page.items.len() == 1 && page.items[0].id == id
        };

        self.delete_status = MutationStatus::Pending;
        match self.catalog.delete_product(id) {
            Ok(receipt) => {
                self.finish_delete(sole_item_on_page);
                Ok(receipt.message)
            }
            Err(CatalogError::NotFound(_)) => {
                debug!("delete of {id}: already gone on the remote");
                self.finish_delete(sole_item_on_page);
                Ok(format!("Product {id} was already deleted"))
            }
            Err(err) => {
                warn!("delete of {id} failed: {err}");
                self.delete_status = MutationStatus::Failure(err.to_string());
                Err(err)
            }
        }
    }

    fn finish_delete(&mut self, sole_item_on_page: bool) {
        self.invalidate();
        if sole_item_on_page && self.state.current_page > 1 {
            self.state.current_page -= 1;
        }
        self.delete_status = MutationStatus::Success;
    }
}
