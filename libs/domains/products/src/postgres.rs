use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL-backed repository (SeaORM)
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);
        active_model.price = Set(input.price);
        active_model.availability = Set(input.availability);
        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        // Negated in SQL so concurrent toggles each flip once.
        let toggled = entity::Entity::update_many()
            .col_expr(
                entity::Column::Availability,
                Expr::col(entity::Column::Availability).not(),
            )
            .filter(entity::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await?
            .into_iter()
            .next();

        if let Some(model) = &toggled {
            tracing::info!(
                product_id = id,
                availability = model.availability,
                "Toggled product availability"
            );
        }
        Ok(toggled.map(Into::into))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
