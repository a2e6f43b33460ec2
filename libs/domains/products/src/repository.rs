use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Lookups by id return `Ok(None)` (or `false` for delete) when the row does
/// not exist; `Err` is reserved for store faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id and availability starts `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, ordered by id ascending
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite name, price and availability
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip availability
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Delete a product by ID
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory repository for tests and local development.
///
/// Ids increase monotonically and are never reused after a delete.
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let product = Product {
            id: table.last_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|product| {
            product.apply_update(input);
            product.clone()
        }))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|product| {
            product.toggle_availability();
            product.clone()
        }))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(input("A", 1.0)).await.unwrap();
        let second = repo.create(input("B", 2.0)).await.unwrap();
        assert!(repo.delete(second.id).await.unwrap());

        let third = repo.create(input("C", 3.0)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["C", "A", "B"] {
            repo.create(input(name, 1.0)).await.unwrap();
        }

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_by_id(7).await.unwrap().is_none());
        assert!(repo.toggle_availability(7).await.unwrap().is_none());
        assert!(!repo.delete(7).await.unwrap());
        let update = UpdateProduct {
            name: "X".to_string(),
            price: 1.0,
            availability: true,
        };
        assert!(repo.update(7, update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_toggle_flips_stored_value() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("A", 1.0)).await.unwrap();

        let toggled = repo.toggle_availability(created.id).await.unwrap().unwrap();
        assert!(!toggled.availability);
        assert!(!repo.get_by_id(created.id).await.unwrap().unwrap().availability);
    }
}
