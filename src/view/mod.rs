//! # View Derivation Pipeline
//!
//! Pure projection of `(collection, ViewState) -> DerivedView`. The order is
//! fixed: filter, then sort, then paginate. Sorting after filtering avoids
//! comparisons on excluded rows; pagination comes last because page
//! boundaries only mean anything over the final ordered, filtered set.
//!
//! Nothing in this module performs I/O or fails. Identical inputs always
//! yield an identical [`DerivedView`].
//!
//! The page-reset rule lives in the [`ViewState`] mutators: changing any
//! filter input moves the view back to page 1 (the old page position is
//! meaningless over a different result set), while changing the sort does
//! not.

use crate::model::Product;

pub mod filter;
pub mod page;
pub mod sort;

use filter::{CategoryFilter, ProductFilter, StatusFilter};
use page::{page_labels, paginate, PageLabel};
use sort::{sort_products, SortField, SortOrder};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Ephemeral, session-local presentation state. Created with defaults at
/// session start, mutated synchronously by user interaction, and discarded
/// with the session. Never persisted and never authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: ProductFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: ProductFilter::default(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ViewState {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.current_page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.current_page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter = ProductFilter::default();
        self.current_page = 1;
    }

    /// Sorting re-orders the same result set, so the page stays put.
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_field = field;
        self.sort_order = order;
    }

    /// Column-header behavior: a repeated field flips the direction, a new
    /// field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

/// The filtered, sorted, paginated projection shown to the user at one
/// instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Rows on the current page, in display order.
    pub items: Vec<Product>,
    /// Size of the filtered set before pagination.
    pub total_items: usize,
    pub total_pages: usize,
    /// Position of the page in the filtered set, `end_index` exclusive.
    pub start_index: usize,
    pub end_index: usize,
    pub page_labels: Vec<PageLabel>,
}

/// Derives the view: filter, then stable sort, then paginate.
pub fn derive_view(products: &[Product], state: &ViewState) -> DerivedView {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| state.filter.matches(p))
        .cloned()
        .collect();
    sort_products(&mut matched, state.sort_field, state.sort_order);

    let window = paginate(&matched, state.current_page, state.items_per_page);
    DerivedView {
        total_items: matched.len(),
        total_pages: window.total_pages,
        start_index: window.start_index,
        end_index: window.end_index,
        page_labels: page_labels(state.current_page, window.total_pages),
        items: window.items.to_vec(),
    }
}
