//! Integration tests for PgProductRepository
//!
//! These run the migrated schema in a throwaway PostgreSQL container.
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use test_utils::TestDatabase;

fn input(name: &str, price: f64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_round_trip() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service.create_product(input("Monitor", 300.0)).await.unwrap();
    assert!(created.availability);

    let fetched = service.get_product(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = service
        .update_product(
            created.id,
            UpdateProduct {
                name: "Curved Monitor".to_string(),
                price: 350.0,
                availability: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Curved Monitor");
    assert!(!updated.availability);

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(toggled.availability);

    service.delete_product(created.id).await.unwrap();
    assert!(matches!(
        service.get_product(created.id).await.unwrap_err(),
        ProductError::NotFound(_)
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_by_id_and_ids_are_not_reused() {
    let db = TestDatabase::new().await;
    db.truncate_products().await;
    let repo = PgProductRepository::new(db.connection());

    let first = repo.create(input("A", 1.0)).await.unwrap();
    let second = repo.create(input("B", 2.0)).await.unwrap();
    assert!(repo.delete(second.id).await.unwrap());
    let third = repo.create(input("C", 3.0)).await.unwrap();

    assert!(third.id > second.id);
    let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_check_constraint_rejects_non_positive() {
    use sea_orm::ConnectionTrait;

    let db = TestDatabase::new().await;
    let result = db
        .connection
        .execute_unprepared("INSERT INTO products (name, price) VALUES ('Broken', 0)")
        .await;

    assert!(result.is_err());
}
