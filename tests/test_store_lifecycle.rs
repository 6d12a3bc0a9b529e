//! Full lifecycle against the sample fixture: seed, re-seed, update, look up, delete.

use inventory_records::{ErrorKind, NewProduct, Product, ProductStore, StoreError, ValidationFailure};

fn fixture() -> Vec<NewProduct> {
    let raw = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/products.json")).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

#[test]
fn sample_products_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ProductStore::new(dir.path().join("data").join("productos.json"));

    let created: Vec<Product> = fixture()
        .into_iter()
        .map(|p| store.create(p).unwrap())
        .collect();
    assert_eq!(created.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    // Seeding the same data again rejects every entry as a duplicate.
    for candidate in fixture() {
        let err = store.create(candidate).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationFailure::AlreadyExists { .. })
        ));
    }
    assert_eq!(store.read_all().unwrap().len(), 3);

    let mut third = fixture().remove(2);
    third.title = "Este es el nuevo titulo del producto".to_string();
    store.update(3, third).unwrap();
    assert_eq!(
        store.read_by_id(3).unwrap().title,
        "Este es el nuevo titulo del producto"
    );

    assert_eq!(store.read_by_id(2).unwrap().code, "123");
    assert_eq!(store.read_by_id(5).unwrap_err().kind(), ErrorKind::NotFound);

    store.delete(2).unwrap();
    let remaining: Vec<u64> = store.read_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![1, 3]);

    // The file is a single compact JSON array in stored order.
    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with(r#"[{"id":1,"title":"Mi producto 1""#));
    assert!(!text.contains('\n'));
}
