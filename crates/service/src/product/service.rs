use std::sync::Arc;
use tracing::instrument;

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Application service wrapping the product repository. Constructed once at
/// startup and injected into the HTTP state, so handlers never touch the
/// connection directly.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<models::product::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, description))]
    pub async fn create(
        &self,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError> {
        self.repo.create(name, price, description).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<models::product::Model>, ServiceError> {
        self.repo.get(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        description: Option<&str>,
    ) -> Result<models::product::Model, ServiceError> {
        self.repo.update(id, name, price, description).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        self.repo.delete(id).await
    }
}
