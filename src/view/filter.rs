//! Compound filter predicate: text search, category, and status, combined
//! with AND. Pure and infallible — a filter can only narrow a collection,
//! never reject one.

use crate::model::Product;

/// Category selection: everything, or one exact label.
///
/// Category labels are an open set owned by the catalog, so the match is
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Is(String),
}

/// Status selection as a three-valued enum rather than a stringified boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match against name and description.
    /// Empty matches everything.
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_status(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Is(label) => product.category == *label,
        }
    }

    fn matches_status(&self, product: &Product) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => product.status,
            StatusFilter::Inactive => !product.status,
        }
    }
}
