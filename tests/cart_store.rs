//! Integration tests for the cart store over real storage backends.

use rust_decimal::Decimal;
use testresult::TestResult;

use lepix::{
    cart::{AddToCart, CartStore, ImageRef, LineId},
    storage::{CartStorage, FileCartStorage, MemoryCartStorage, PersistedCart},
};

fn hoodie() -> AddToCart {
    let mut input = AddToCart::new(1, "Hoodie", Decimal::from(100));
    input.sku = Some("HOOD-1".to_string());
    input.images = vec![ImageRef::Sorted {
        url: "hoodie.png".to_string(),
        sort: 0,
    }];
    input
}

fn hoodie_black_l() -> AddToCart {
    let mut input = hoodie();
    input.variant_id = Some(10);
    input.price = Decimal::from(120);
    input.color = Some("Black".to_string());
    input.size = Some("L".to_string());
    input
}

#[test]
fn cart_survives_a_restart_on_disk() -> TestResult {
    let dir = tempfile::tempdir()?;

    {
        let mut store = CartStore::open(Box::new(FileCartStorage::new(dir.path())))?;

        store.add(hoodie(), 2);
        store.add(hoodie_black_l(), 1);
    }

    let store = CartStore::open(Box::new(FileCartStorage::new(dir.path())))?;

    assert_eq!(store.items().len(), 2);
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_amount(), Decimal::from(320));

    Ok(())
}

#[test]
fn persisted_document_layout_is_stable() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = FileCartStorage::new(dir.path());

    {
        let mut store = CartStore::open(Box::new(storage.clone()))?;
        store.add(hoodie_black_l(), 2);
    }

    let raw = std::fs::read_to_string(storage.path())?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(
        document.pointer("/items/0/lineId"),
        Some(&serde_json::Value::from("1:10"))
    );
    assert_eq!(
        document.pointer("/items/0/quantity"),
        Some(&serde_json::Value::from(2))
    );
    assert_eq!(
        document.pointer("/items/0/product/variantId"),
        Some(&serde_json::Value::from(10))
    );
    assert_eq!(
        document.pointer("/items/0/product/images/0"),
        Some(&serde_json::Value::from("hoodie.png"))
    );
    assert_eq!(
        document.pointer("/items/0/product/name"),
        Some(&serde_json::Value::from("Hoodie Black L"))
    );

    Ok(())
}

#[test]
fn old_format_data_is_abandoned_not_migrated() -> TestResult {
    let dir = tempfile::tempdir()?;

    // The pre-variant layout under the old, unversioned key.
    std::fs::write(
        dir.path().join("lepix-cart.json"),
        r#"{"items":[{"lineId":"1","quantity":3}]}"#,
    )?;

    let store = CartStore::open(Box::new(FileCartStorage::new(dir.path())))?;

    assert!(store.items().is_empty());

    Ok(())
}

#[test]
fn merge_and_identity_hold_across_backends() -> TestResult {
    let dir = tempfile::tempdir()?;

    let backends: Vec<Box<dyn CartStorage>> = vec![
        Box::new(MemoryCartStorage::new()),
        Box::new(FileCartStorage::new(dir.path())),
    ];

    for backend in backends {
        let mut store = CartStore::open(backend)?;

        store.add(hoodie(), 2);
        store.add(hoodie(), 3);
        store.add(hoodie_black_l(), 1);

        assert_eq!(store.items().len(), 2);
        assert_eq!(
            store
                .items()
                .iter()
                .map(|line| (line.line_id, line.quantity))
                .collect::<Vec<_>>(),
            vec![(LineId::new(1, None), 5), (LineId::new(1, Some(10)), 1)]
        );
    }

    Ok(())
}

#[test]
fn checkout_clear_reaches_the_persisted_document() -> TestResult {
    let storage = MemoryCartStorage::new();
    let handle = storage.clone();

    let mut store = CartStore::open(Box::new(storage))?;

    store.add(hoodie(), 2);
    store.clear();

    assert_eq!(handle.saved()?, Some(PersistedCart::default()));

    Ok(())
}

#[test]
fn quantity_floor_holds_end_to_end() -> TestResult {
    let mut store = CartStore::open(Box::new(MemoryCartStorage::new()))?;

    store.add(hoodie(), 0);
    store.set_qty(&LineId::new(1, None), 0);

    assert_eq!(store.total_items(), 1);

    Ok(())
}
