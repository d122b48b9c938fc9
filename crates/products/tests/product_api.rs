//! Black-box checks against the public `storefront-products` API.

use storefront_core::{DomainError, Entity};
use storefront_products::{Product, ProductId};

#[test]
fn widget_example_reads_back_as_constructed() {
    let product = Product::new("P1", "Widget", "A small widget", 9.99, "Hardware");

    assert_eq!(product.id().as_str(), "P1");
    assert_eq!(product.price(), 9.99);
    assert_eq!(product.category(), "Hardware");
}

#[test]
fn product_is_freely_mutable_and_checkable_on_demand() {
    storefront_observability::init();

    let mut product = Product::new(ProductId::generate(), "Kettle", "1.7L", 24.5, "Kitchen");
    let original = product.clone();

    product.set_price(-5.0);
    assert_eq!(product.price(), -5.0);
    assert!(matches!(product.validate(), Err(DomainError::Validation(_))));

    product.set_price(19.0);
    product.set_description("1.7L, stainless steel");
    assert_eq!(product.validate(), Ok(()));

    assert!(product.same_identity(&original));
    assert_ne!(product, original);
}

#[test]
fn product_round_trips_through_json() {
    let product = Product::new("P9", "Mug", "Ceramic, 350ml", 7.25, "Kitchen");

    let encoded = serde_json::to_string(&product).unwrap();
    let decoded: Product = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, product);
}

#[test]
fn product_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Product>();
    assert_send_sync::<ProductId>();
}
