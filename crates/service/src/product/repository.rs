use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence contract for the product store. Each method is a single
/// atomic row operation; the pool handles per-request acquisition.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::product::Model>, ServiceError>;
    async fn create(
        &self,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::product::Model>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self) -> Result<Vec<models::product::Model>, ServiceError> {
        crate::db::product_service::list_products(&self.db).await
    }

    async fn create(
        &self,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError> {
        crate::db::product_service::create_product(&self.db, name, price, description).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::product::Model>, ServiceError> {
        crate::db::product_service::get_product(&self.db, id).await
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError> {
        crate::db::product_service::update_product(&self.db, id, name, price, description).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::product_service::delete_product(&self.db, id).await
    }
}
