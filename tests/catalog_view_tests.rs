//! Integration tests for the catalog filter/sort engine

use storefront::prelude::*;

fn product(id: ItemId, title: &str, category: &str, price: f64, rating: f64) -> Item {
    Item {
        id,
        title: title.to_string(),
        subtitle: None,
        description: String::new(),
        category: category.to_string(),
        rating,
        badges: vec![],
        image: None,
        kind: ItemKind::Product(ProductInfo {
            price,
            discount: None,
            stock: 1,
            review_count: 0,
            details: vec![],
            specifications: Default::default(),
        }),
    }
}

fn seed_products() -> Vec<Item> {
    StorefrontConfig::default_config().catalog.products
}

fn ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn test_identity_query_keeps_original_order() {
    let items = seed_products();
    let query = CatalogQuery::new().with_price_range(0.0, f64::INFINITY);
    assert_eq!(ids(&compute_view(&items, &query)), ids(&items));
    assert_eq!(ids(&compute_view(&items, &CatalogQuery::new())), ids(&items));
}

#[test]
fn test_category_filter_is_exact() {
    let items = seed_products();
    let view = compute_view(&items, &CatalogQuery::new().with_category("Jewelry"));
    assert_eq!(ids(&view), vec![1, 7]);
    assert!(view.iter().all(|item| item.category == "Jewelry"));

    let lowercase = compute_view(&items, &CatalogQuery::new().with_category("jewelry"));
    assert!(lowercase.is_empty());
}

#[test]
fn test_price_range_is_inclusive() {
    let items = seed_products();
    let view = compute_view(&items, &CatalogQuery::new().with_price_range(22.0, 45.5));
    assert!(!view.is_empty());
    for item in &view {
        let price = item.price().unwrap();
        assert!((22.0..=45.5).contains(&price), "{} out of range", price);
    }
    assert!(view.iter().any(|item| item.price() == Some(22.0)));
    assert!(view.iter().any(|item| item.price() == Some(45.5)));
}

#[test]
fn test_inverted_range_yields_nothing() {
    let items = seed_products();
    let view = compute_view(&items, &CatalogQuery::new().with_price_range(100.0, 10.0));
    assert!(view.is_empty());
}

#[test]
fn test_price_sorts_reverse_each_other() {
    let items = seed_products();
    let asc = ids(&compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceAsc)));
    let mut desc = ids(&compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceDesc)));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_sort_uses_raw_price() {
    // 100 at 50% off displays cheaper than 60, but still sorts after it
    let mut discounted = product(1, "Lamp", "Home Decor", 100.0, 4.0);
    if let ItemKind::Product(info) = &mut discounted.kind {
        info.discount = Some(50.0);
    }
    let items = vec![discounted, product(2, "Rug", "Home Decor", 60.0, 4.0)];
    let view = compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceAsc));
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn test_rating_sort_is_stable() {
    let items = seed_products();
    let view = compute_view(&items, &CatalogQuery::new().with_sort(SortKey::Rating));
    assert_eq!(ids(&view), vec![6, 4, 1, 12, 5, 10, 2, 7, 3, 8, 9, 11]);
}

#[test]
fn test_price_asc_leaves_source_unchanged() {
    let items = vec![
        product(1, "A", "Food", 10.0, 4.0),
        product(2, "B", "Food", 50.0, 4.0),
        product(3, "C", "Food", 30.0, 4.0),
    ];
    let before = items.clone();

    let view = compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceAsc));

    let prices: Vec<_> = view.iter().filter_map(Item::price).collect();
    assert_eq!(prices, vec![10.0, 30.0, 50.0]);
    assert_eq!(items, before);
}

#[test]
fn test_search_matches_title_case_insensitively() {
    let items = vec![
        product(1, "Handcrafted Jewelry Set", "Jewelry", 89.99, 4.7),
        product(2, "Organic Skincare Bundle", "Jewelry", 45.5, 4.5),
    ];
    let view = compute_view(&items, &CatalogQuery::new().with_search("SKIN"));
    assert_eq!(ids(&view), vec![2]);
}

#[test]
fn test_search_matches_category_and_description() {
    let items = seed_products();
    let by_category = compute_view(&items, &CatalogQuery::new().with_search("home decor"));
    assert_eq!(ids(&by_category), vec![4, 10]);

    let by_description = compute_view(&items, &CatalogQuery::new().with_search("cooperatives"));
    assert_eq!(ids(&by_description), vec![12]);
}

#[test]
fn test_filters_combine() {
    let items = seed_products();
    let query = CatalogQuery::new()
        .with_search("handmade")
        .with_category("Jewelry")
        .with_price_range(50.0, 100.0)
        .with_sort(SortKey::PriceDesc);
    let view = compute_view(&items, &query);
    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn test_videos_ignore_range_and_sort_after_products() {
    let config = StorefrontConfig::default_config();
    let mut items = config.catalog.videos.clone();
    items.push(product(50, "Budget Planner", "Finance", 12.0, 4.0));

    let view = compute_view(
        &items,
        &CatalogQuery::new()
            .with_price_range(0.0, 5.0)
            .with_sort(SortKey::PriceAsc),
    );
    // The planner is out of range; every video survives in catalog order
    assert_eq!(ids(&view), vec![101, 102, 103, 104, 105, 106]);

    let view = compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceDesc));
    assert_eq!(view[0].id, 50);
}

#[test]
fn test_in_memory_catalog_view_reports_totals() {
    let catalog = InMemoryCatalog::from_items(seed_products());
    let view = catalog.view(&CatalogQuery::new().with_category("Food"));
    assert_eq!(view.count, 2);
    assert_eq!(view.total, 12);
    assert_eq!(view.query.category, CategoryFilter::Exact("Food".to_string()));
}
