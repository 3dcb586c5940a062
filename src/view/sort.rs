//! Field comparators for ordering a product collection. Sorting itself goes
//! through the standard library's stable `sort_by`, so rows that compare
//! equal keep their source order and never flicker between derivations.

use std::cmp::Ordering;

use crate::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Category,
    Price,
    Stock,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Compares two products on `field`, with `Desc` negating the ascending
/// result. Text fields compare case-insensitively; `price` compares on the
/// parsed decimal value, not its string form; `status` orders inactive
/// before active.
pub fn compare(a: &Product, b: &Product, field: SortField, order: SortOrder) -> Ordering {
    let ascending = match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Category => compare_text(&a.category, &b.category),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::Status => a.status.cmp(&b.status),
    };
    match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

pub fn sort_products(products: &mut [Product], field: SortField, order: SortOrder) {
    products.sort_by(|a, b| compare(a, b, field, order));
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, price: &str, stock: u32, status: bool) -> Product {
        Product {
            id: format!("id-{name}-{price}"),
            name: name.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            category: category.to_string(),
            stock,
            image: String::new(),
            status,
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let a = product("apple", "c", "1", 0, true);
        let b = product("Banana", "c", "1", 0, true);
        assert_eq!(compare(&a, &b, SortField::Name, SortOrder::Asc), Ordering::Less);
        assert_eq!(compare(&a, &b, SortField::Name, SortOrder::Desc), Ordering::Greater);
    }

    #[test]
    fn price_sort_is_numeric_not_lexicographic() {
        // As strings "9.50" > "10.00"; as decimals the opposite.
        let cheap = product("A", "c", "9.50", 0, true);
        let pricey = product("B", "c", "10.00", 0, true);
        assert_eq!(
            compare(&cheap, &pricey, SortField::Price, SortOrder::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn stock_sort_is_numeric() {
        let low = product("A", "c", "1", 2, true);
        let high = product("B", "c", "1", 10, true);
        assert_eq!(
            compare(&low, &high, SortField::Stock, SortOrder::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn status_orders_inactive_before_active() {
        let inactive = product("A", "c", "1", 0, false);
        let active = product("B", "c", "1", 0, true);
        assert_eq!(
            compare(&inactive, &active, SortField::Status, SortOrder::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut products = vec![
            product("First", "c", "5.00", 1, true),
            product("Second", "c", "5.00", 2, true),
            product("Third", "c", "5.00", 3, true),
        ];
        sort_products(&mut products, SortField::Price, SortOrder::Asc);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn resorting_a_sorted_collection_is_a_noop() {
        let mut products = vec![
            product("B", "c", "2.00", 1, true),
            product("A", "c", "1.00", 2, false),
            product("C", "c", "3.00", 3, true),
        ];
        sort_products(&mut products, SortField::Name, SortOrder::Asc);
        let once = products.clone();
        sort_products(&mut products, SortField::Name, SortOrder::Asc);
        assert_eq!(products, once);
    }

    #[test]
    fn desc_reverses_asc() {
        let mut products = vec![
            product("A", "c", "1.00", 1, true),
            product("B", "c", "2.00", 2, true),
            product("C", "c", "3.00", 3, true),
        ];
        sort_products(&mut products, SortField::Price, SortOrder::Desc);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
