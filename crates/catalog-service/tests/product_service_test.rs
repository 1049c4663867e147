//! End-to-end composition tests: configuration → store factory → service.
//!
//! These tests play the role of the application's composition root — the
//! store adapter is selected from configuration and the service only ever
//! sees the trait object.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use catalog_core::config::AppConfig;
use catalog_core::error::ErrorKind;
use catalog_core::traits::store::Store;
use catalog_entity::product::ProductDraft;
use catalog_service::ProductService;
use catalog_store::DynProductStore;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary, honoring the configured
/// level unless `RUST_LOG` overrides it.
fn init_tracing() {
    INIT.call_once(|| {
        let logging = AppConfig::default().logging;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
            )
            .with_test_writer()
            .init();
    });
}

/// Compose a service the way a deployment would: config → factory → service.
async fn setup() -> (ProductService, DynProductStore) {
    init_tracing();

    let config = AppConfig::default();
    let store = catalog_store::connect(&config.store)
        .await
        .expect("store should connect");

    (ProductService::new(store.clone()), store)
}

fn mouse_draft() -> ProductDraft {
    ProductDraft {
        name: "My Toy".to_string(),
        maker: "My Home".to_string(),
        price: 5000,
        image_url: "https://cdn/mouse.jpg".to_string(),
    }
}

#[tokio::test]
async fn config_defaults_select_the_memory_store() {
    init_tracing();

    let config = AppConfig::load("test").expect("config should load without files");

    assert_eq!(config.store.provider, "memory");
    let store = catalog_store::connect(&config.store)
        .await
        .expect("store should connect");
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_find_roundtrip() {
    let (service, _store) = setup().await;

    let created = service.create(mouse_draft()).await.unwrap();

    let found = service.find(created.id).await.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.name, "My Toy");
    assert_eq!(found.price, 5000);
}

#[tokio::test]
async fn find_missing_product_is_not_found() {
    let (service, _store) = setup().await;

    let err = service.find(100.into()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(err.message.contains("100"));
}

#[tokio::test]
async fn find_all_on_empty_catalog_is_empty() {
    let (service, _store) = setup().await;

    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_fields_wholesale() {
    let (service, _store) = setup().await;
    let created = service.create(mouse_draft()).await.unwrap();

    let updated = service
        .update(
            created.id,
            ProductDraft {
                name: "My New Toy".to_string(),
                maker: "My New Home".to_string(),
                price: 7000,
                image_url: "https://cdn/mouse2.jpg".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "My New Toy");
    assert_eq!(updated.maker, "My New Home");
    assert_eq!(updated.price, 7000);
    assert_eq!(updated.image_url, "https://cdn/mouse2.jpg");
}

#[tokio::test]
async fn delete_then_find_fails() {
    let (service, _store) = setup().await;
    let created = service.create(mouse_draft()).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert_eq!(
        service.find(created.id).await.unwrap_err().kind,
        ErrorKind::NotFound
    );
    assert_eq!(
        service.delete(created.id).await.unwrap_err().kind,
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn store_clear_resets_records_between_runs() {
    let (service, store) = setup().await;
    service.create(mouse_draft()).await.unwrap();
    service.create(mouse_draft()).await.unwrap();

    store.clear().await.unwrap();

    assert!(service.find_all().await.unwrap().is_empty());
}
