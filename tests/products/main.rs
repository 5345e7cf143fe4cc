//! Integration tests for the product list: query, selection, mutation, export.

mod support;

use stockroom::{
    run_query, CatalogConfig, CatalogError, CategoryFilter, ExportQuoting, FormFields,
    ProductCatalog, ProductId, ProductInput, QueryState, RecordStore, SortDirection, SortKey,
    CSV_HEADER,
};
use support::{a_and_b, buffered_catalog, ids, product, store_of};

#[test]
fn stock_sort_follows_updates() {
    let (mut catalog, _) = buffered_catalog(a_and_b(), CatalogConfig::default());
    catalog.set_query(QueryState::new().with_sort(SortKey::Stock, SortDirection::Asc));

    assert_eq!(ids(&catalog.view()), vec![2, 1]);

    catalog
        .update(ProductId(2), product("B", "S2", "Y", 99, 20.0))
        .unwrap();

    assert_eq!(ids(&catalog.view()), vec![1, 2]);
}

#[test]
fn search_matches_exactly_the_substring_hits() {
    let store = store_of(&[
        ("Premium Widget", "WDG-001", "Electronics", 145, 29.99),
        ("Deluxe Gadget", "GDG-002", "Accessories", 67, 49.99),
        ("Standard Tool", "TOL-003", "Tools", 234, 19.99),
        ("Professional Kit", "KIT-004", "Kits", 89, 99.99),
        ("Basic Component", "CMP-005", "Components", 12, 14.99),
    ]);

    for term in ["", "KIT", "o", "-00", "ess", "zzz"] {
        let view = run_query(&store, &QueryState::new().with_search(term));
        let needle = term.to_lowercase();
        let expected: Vec<u64> = store
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.sku.to_lowercase().contains(&needle)
                    || r.category.to_lowercase().contains(&needle)
            })
            .map(|r| r.id.get())
            .collect();

        let mut got = ids(&view);
        got.sort_unstable();
        assert_eq!(got, expected, "search term {:?}", term);
    }
}

#[test]
fn category_filter_is_exact() {
    let store = store_of(&[
        ("A", "1", "Tools", 0, 0.0),
        ("B", "2", "tools", 0, 0.0),
        ("C", "3", "Power Tools", 0, 0.0),
    ]);
    let state = QueryState::new().with_category(CategoryFilter::parse("Tools"));
    assert_eq!(ids(&run_query(&store, &state)), vec![1]);
}

#[test]
fn name_ties_keep_store_order_descending() {
    let store = store_of(&[
        ("Bolt", "1", "X", 0, 0.0),
        ("anchor", "2", "X", 0, 0.0),
        ("Bolt", "3", "X", 0, 0.0),
        ("clamp", "4", "X", 0, 0.0),
    ]);
    let asc = QueryState::new().with_sort(SortKey::Name, SortDirection::Asc);
    let desc = QueryState::new().with_sort(SortKey::Name, SortDirection::Desc);

    assert_eq!(ids(&run_query(&store, &asc)), vec![2, 1, 3, 4]);
    assert_eq!(ids(&run_query(&store, &desc)), vec![4, 1, 3, 2]);
}

#[test]
fn accented_names_sort_among_their_letters() {
    let store = store_of(&[
        ("Zebra Clamp", "1", "X", 0, 0.0),
        ("Éclair Mold", "2", "X", 0, 0.0),
        ("Apple Rack", "3", "X", 0, 0.0),
        ("éclair mold", "4", "X", 0, 0.0),
    ]);
    let asc = QueryState::new().with_sort(SortKey::Name, SortDirection::Asc);
    assert_eq!(ids(&run_query(&store, &asc)), vec![3, 4, 2, 1]);
}

#[test]
fn header_clicks_toggle_direction() {
    let mut catalog = ProductCatalog::seeded();
    catalog.sort_by(SortKey::Price);
    let cheapest_first = ids(&catalog.view());
    catalog.sort_by(SortKey::Price);
    let dearest_first = ids(&catalog.view());

    assert_eq!(cheapest_first, vec![5, 3, 1, 2, 4]);
    assert_eq!(dearest_first, vec![4, 2, 1, 3, 5]);
}

#[test]
fn ids_are_never_reused() {
    let (mut catalog, _) = buffered_catalog(RecordStore::new(), CatalogConfig::default());
    let first = catalog.create(product("A", "1", "X", 1, 1.0)).unwrap();
    assert_eq!(first, ProductId(1));

    for n in 2..=5 {
        let id = catalog
            .create(product(&format!("P{}", n), "s", "X", 1, 1.0))
            .unwrap();
        assert_eq!(id, ProductId(n));
    }

    catalog.delete_many(&[ProductId(3), ProductId(5)]);
    let next = catalog.create(product("Z", "z", "X", 1, 1.0)).unwrap();
    assert_eq!(next, ProductId(6));
}

#[test]
fn toggle_all_pair_is_idempotent() {
    let mut catalog = ProductCatalog::seeded();
    catalog.set_category(CategoryFilter::parse("Kits"));

    let before = catalog.selection().clone();
    catalog.toggle_all();
    assert!(catalog.all_selected());
    catalog.toggle_all();

    assert_eq!(catalog.selection(), &before);
}

#[test]
fn delete_many_reconciles_selection() {
    let mut catalog = ProductCatalog::seeded();
    catalog.toggle(ProductId(1));
    catalog.toggle(ProductId(2));
    catalog.toggle(ProductId(3));

    let removed = catalog.delete_many(&[ProductId(2), ProductId(3)]);

    assert_eq!(removed, 2);
    assert!(!catalog.selection().is_selected(ProductId(2)));
    assert!(!catalog.selection().is_selected(ProductId(3)));
    assert!(catalog.selection().is_selected(ProductId(1)));
}

#[test]
fn bulk_delete_removes_selection_and_notifies() {
    let (mut catalog, notices) = buffered_catalog(a_and_b(), CatalogConfig::default());
    catalog.toggle_all();

    assert_eq!(catalog.delete_selected(), 2);
    assert!(catalog.store().is_empty());
    assert!(catalog.selection().is_empty());
    assert!(!catalog.all_selected());

    let notices = notices.lock().unwrap();
    assert_eq!(
        notices.last().map(String::as_str),
        Some("[NOTICE] Products Deleted: 2 products have been deleted successfully.")
    );
}

#[test]
fn categories_track_the_store() {
    let mut catalog = ProductCatalog::seeded();
    assert_eq!(
        catalog.categories(),
        vec!["all", "Electronics", "Accessories", "Tools", "Kits", "Components"]
    );

    catalog.delete_one(ProductId(4));
    catalog
        .create(product("Drill", "DRL-006", "Power", 5, 120.0))
        .unwrap();

    assert_eq!(
        catalog.categories(),
        vec!["all", "Electronics", "Accessories", "Tools", "Components", "Power"]
    );
}

#[test]
fn query_state_survives_mutations() {
    let mut catalog = ProductCatalog::seeded();
    catalog.set_search("tool");
    catalog
        .create(product("Tool Box", "BOX-1", "Storage", 3, 9.0))
        .unwrap();

    assert_eq!(catalog.query_state().search_term, "tool");
    assert_eq!(ids(&catalog.view()), vec![3, 6]);
}

#[test]
fn export_mirrors_view_order() {
    let (mut catalog, _) = buffered_catalog(a_and_b(), CatalogConfig::default());
    catalog.set_query(QueryState::new().with_sort(SortKey::Stock, SortDirection::Asc));

    let export = catalog.export();

    assert_eq!(export.filename, "products.csv");
    assert_eq!(export.line_count(), 3);
    let lines: Vec<&str> = export.body.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], "B,S2,Y,3,20");
    assert_eq!(lines[2], "A,S1,X,10,5");
}

#[test]
fn export_of_filtered_view_only() {
    let mut catalog = ProductCatalog::seeded();
    catalog.set_search("zzz");
    let export = catalog.export();
    assert_eq!(export.body, CSV_HEADER);
}

#[test]
fn quoted_export_is_opt_in() {
    let store = store_of(&[("Nuts, Bolts", "NB-1", "Hardware", 40, 2.5)]);
    let config = CatalogConfig::default().with_export_quoting(ExportQuoting::Quoted);
    let (mut catalog, _) = buffered_catalog(store, config);

    let export = catalog.export();
    assert_eq!(
        export.body.lines().nth(1),
        Some("\"Nuts, Bolts\",\"NB-1\",\"Hardware\",\"40\",\"2.5\"")
    );
}

#[test]
fn form_create_and_edit_round_trip() {
    let (mut catalog, notices) = buffered_catalog(RecordStore::new(), CatalogConfig::default());
    let form = FormFields::from_pairs([
        ("name", "Torque Wrench"),
        ("sku", "TRQ-010"),
        ("category", "Tools"),
        ("stock", "8"),
        ("price", "64.5"),
    ]);

    let id = catalog.create_from_form(&form).unwrap();
    let record = catalog.get(id).unwrap().clone();
    assert_eq!(record.price, 64.5);
    assert!(catalog.stock_status(&record).is_low());

    let mut edit = ProductInput::try_from(&record).unwrap().to_form();
    edit.set("stock", "80");
    catalog.update_from_form(id, &edit).unwrap();

    let record = catalog.get(id).unwrap();
    assert_eq!(record.stock, 80);
    assert!(!catalog.stock_status(record).is_low());
    assert_eq!(notices.lock().unwrap().len(), 2);
}

#[test]
fn rejected_edit_leaves_record_alone() {
    let (mut catalog, notices) = buffered_catalog(a_and_b(), CatalogConfig::default());
    let form = FormFields::from_pairs([
        ("name", "B2"),
        ("sku", "S2"),
        ("category", "Y"),
        ("stock", "many"),
        ("price", "1"),
    ]);

    let err = catalog.update_from_form(ProductId(2), &form).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(catalog.get(ProductId(2)).unwrap().name, "B");
    assert!(notices.lock().unwrap().is_empty());
}

#[test]
fn blank_fields_never_reach_the_store() {
    let (mut catalog, notices) = buffered_catalog(a_and_b(), CatalogConfig::default());

    let err = ProductInput::try_new("", "", "", 1, 1.0).unwrap_err();
    assert_eq!(err.field, "name");

    let form = FormFields::from_pairs([
        ("name", ""),
        ("sku", ""),
        ("category", ""),
        ("stock", "1"),
        ("price", "1"),
    ]);
    assert!(catalog.create_from_form(&form).is_err());
    assert_eq!(catalog.store().len(), 2);
    assert!(notices.lock().unwrap().is_empty());
}
