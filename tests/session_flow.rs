//! End-to-end session flows against the in-memory catalog: the whole
//! fetch/derive/mutate/invalidate loop a UI would drive, without a network.

use stockroom::{
    CatalogClient, CatalogError, InMemoryCatalog, InventorySession, MutationStatus, PageLabel,
    Product, ProductDraft, SortField, SortOrder, StatusFilter,
};

fn product(i: usize, name: &str, category: &str, price: &str, status: bool) -> Product {
    Product {
        id: format!("prod-{i}"),
        name: name.to_string(),
        description: format!("{name} for the back office"),
        price: price.parse().unwrap(),
        category: category.to_string(),
        stock: (i % 7) as u32,
        image: format!("https://cdn.example.com/{i}.jpg"),
        status,
    }
}

fn draft(name: &str, category: &str, price: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: format!("{name} for the back office"),
        price: price.parse().unwrap(),
        category: category.to_string(),
        stock: 3,
        image: String::new(),
        status: true,
    }
}

/// 23 products: 12 active chairs, 8 inactive lamps, 3 active desks.
fn showroom() -> InMemoryCatalog {
    let mut products = Vec::new();
    for i in 1..=12 {
        products.push(product(i, &format!("Chair {i:02}"), "furniture", "49.99", true));
    }
    for i in 13..=20 {
        products.push(product(i, &format!("Lamp {i:02}"), "lighting", "19.50", false));
    }
    for i in 21..=23 {
        products.push(product(i, &format!("Desk {i:02}"), "furniture", "120.00", true));
    }
    InMemoryCatalog::with_products(products)
}

#[test]
fn default_view_shows_the_first_page_of_everything() {
    let mut session = InventorySession::new(showroom());
    let view = session.view().unwrap();

    assert_eq!(view.total_items, 23);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.items.len(), 10);
    // Default order is by name ascending.
    assert_eq!(view.items[0].name, "Chair 01");
    assert_eq!(
        view.page_labels,
        vec![PageLabel::Page(1), PageLabel::Page(2), PageLabel::Page(3)]
    );
}

#[test]
fn search_filter_and_clear_round_trip() {
    let mut session = InventorySession::new(showroom());

    session.set_search("lamp");
    let lamps = session.view().unwrap();
    assert_eq!(lamps.total_items, 8);
    assert!(lamps.items.iter().all(|p| p.name.starts_with("Lamp")));

    session.set_status(StatusFilter::Active);
    assert_eq!(session.view().unwrap().total_items, 0);

    session.clear_filters();
    assert_eq!(session.view().unwrap().total_items, 23);
}

#[test]
fn sorting_by_price_descending_puts_desks_first() {
    let mut session = InventorySession::new(showroom());
    session.set_sort(SortField::Price, SortOrder::Desc);

    let view = session.view().unwrap();
    assert!(view.items[0].name.starts_with("Desk"));
    assert_eq!(view.items[0].price, "120.00".parse().unwrap());
}

#[test]
fn filtering_from_a_deep_page_lands_back_on_page_one() {
    let mut session = InventorySession::new(showroom());
    session.set_page(3);
    assert_eq!(session.view().unwrap().items.len(), 3);

    session.set_search("chair");
    let view = session.view().unwrap();
    assert_eq!(session.state().current_page, 1);
    assert_eq!(view.total_items, 12);
    assert_eq!(view.items.len(), 10);
}

#[test]
fn create_then_view_shows_the_server_assigned_record() {
    let mut session = InventorySession::new(showroom());
    session.view().unwrap();

    let sent = draft("Armchair", "furniture", "89.95");
    let created = session.create(&sent).unwrap();
    assert_eq!(created.id, "prod-24");
    assert_eq!(created.draft(), sent);

    session.set_search("armchair");
    let view = session.view().unwrap();
    assert_eq!(view.total_items, 1);
    assert_eq!(view.items[0].price, "89.95".parse().unwrap());
}

#[test]
fn deleting_the_last_item_of_the_last_page_repairs_the_position() {
    let mut session = InventorySession::new(showroom());
    session.set_page(3);
    let page = session.view().unwrap();
    assert_eq!(page.items.len(), 3);

    // Clear the last page down to a sole item, then delete it too.
    session.delete(&page.items[0].id.clone()).unwrap();
    session.delete(&page.items[1].id.clone()).unwrap();
    assert_eq!(session.state().current_page, 3);

    let sole = session.view().unwrap().items[0].clone();
    session.delete(&sole.id).unwrap();

    assert_eq!(session.state().current_page, 2);
    let view = session.view().unwrap();
    assert_eq!(view.total_items, 20);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.items.len(), 10);
}

#[test]
fn failed_mutation_leaves_the_view_exactly_as_it_was() {
    let mut session = InventorySession::new(showroom());
    session.set_search("chair");
    session.set_page(2);
    let before = session.view().unwrap();

    session
        .catalog_mut()
        .fail_next_with(CatalogError::Network("connection reset".to_string()));
    let err = session
        .update("prod-1", &draft("Throne", "furniture", "999.00"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)));
    assert!(matches!(session.update_status(), MutationStatus::Failure(_)));

    assert_eq!(session.view().unwrap(), before);
    assert_eq!(session.state().current_page, 2);
}

#[test]
fn concurrent_deletion_elsewhere_surfaces_on_the_next_update() {
    let mut session = InventorySession::new(showroom());
    session.view().unwrap();

    // Another client removes the product behind this session's back.
    session.catalog_mut().delete_product("prod-5").unwrap();

    let err = session
        .update("prod-5", &draft("Ghost Chair", "furniture", "1.00"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    // The failure invalidated the cache, so the view reflects reality.
    assert_eq!(session.view().unwrap().total_items, 22);

    // Deleting the already-gone product is a no-op success.
    let message = session.delete("prod-5").unwrap();
    assert!(message.contains("already deleted"));
}

#[test]
fn toggling_the_default_column_header_reverses_the_order() {
    let mut session = InventorySession::new(showroom());
    // Name ascending is the default, so the first toggle flips it.
    session.toggle_sort(SortField::Name);
    let descending = session.view().unwrap();
    session.toggle_sort(SortField::Name);
    let ascending = session.view().unwrap();

    assert_eq!(descending.items[0].name, "Lamp 20");
    assert_eq!(ascending.items[0].name, "Chair 01");
}
