//! In-memory catalog for testing engine logic without a network. Mirrors the
//! remote's observable semantics: sequential id assignment, server-side
//! search and pagination on list, 404-equivalent errors for unknown ids.

use super::{CatalogClient, DeleteReceipt, ListQuery};
use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductDraft};

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    next_id: u64,
    fail_next: Option<CatalogError>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
            fail_next: None,
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.len() as u64 + 1;
        Self {
            products,
            next_id,
            fail_next: None,
        }
    }

    /// Arms a one-shot failure: the next mutation returns `err` and applies
    /// nothing.
    pub fn fail_next_with(&mut self, err: CatalogError) {
        self.fail_next = Some(err);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn take_failure(&mut self) -> Result<()> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn assign_id(&mut self) -> String {
        let id = format!("prod-{}", self.next_id);
        self.next_id += 1;
        id
    }
}

impl CatalogClient for InMemoryCatalog {
    fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>> {
        let matched = self.products.iter().filter(|p| match query.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            }
            _ => true,
        });
        let start = query.page.saturating_sub(1).saturating_mul(query.limit);
        Ok(matched.skip(start).take(query.limit).cloned().collect())
    }

    fn get_product(&self, id: &str) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn create_product(&mut self, draft: &ProductDraft) -> Result<Product> {
        self.take_failure()?;
        let id = self.assign_id();
        let product = draft.clone().into_product(id);
        self.products.push(product.clone());
        Ok(product)
    }

    fn update_product(&mut self, id: &str, draft: &ProductDraft) -> Result<Product> {
        self.take_failure()?;
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        *slot = draft.clone().into_product(id);
        Ok(slot.clone())
    }

    fn delete_product(&mut self, id: &str) -> Result<DeleteReceipt> {
        self.take_failure()?;
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        Ok(DeleteReceipt {
            message: format!("Product {id} deleted"),
        })
    }
}

// --- Test fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn product(id: &str, name: &str, category: &str, price: &str, status: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            price: price.parse().unwrap(),
            category: category.to_string(),
            stock: 5,
            image: format!("https://cdn.example.com/{id}.jpg"),
            status,
        }
    }

    pub fn draft(name: &str, category: &str, price: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            price: price.parse().unwrap(),
            category: category.to_string(),
            stock: 5,
            image: String::new(),
            status: true,
        }
    }

    /// A catalog seeded with `count` active products named `Item 01..`.
    pub fn seeded(count: usize) -> InMemoryCatalog {
        let products = (1..=count)
            .map(|i| {
                product(
                    &format!("prod-{i}"),
                    &format!("Item {i:02}"),
                    "misc",
                    "1.00",
                    true,
                )
            })
            .collect();
        InMemoryCatalog::with_products(products)
    }
}
