use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use models::errors::ModelError;
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::routes::AppState;

/// Client-supplied product fields. `id` and `created_at` are server-assigned
/// and silently ignored if present in the payload.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Collect every violated field constraint so the 422 body lists them all.
fn validate_input(input: &ProductInput) -> Vec<String> {
    let mut details = Vec::new();
    if let Err(ModelError::Validation(msg)) = models::product::validate_name(&input.name) {
        details.push(msg);
    }
    if let Err(ModelError::Validation(msg)) = models::product::validate_price(input.price) {
        details.push(msg);
    }
    if let Err(ModelError::Validation(msg)) =
        models::product::validate_description(input.description.as_deref())
    {
        details.push(msg);
    }
    details
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    match state.products.list().await {
        Ok(list) => {
            info!(count = list.len(), "list products");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list products failed");
            Err(JsonApiError::internal("List Failed", e))
        }
    }
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<models::product::Model>), JsonApiError> {
    let details = validate_input(&input);
    if !details.is_empty() {
        return Err(JsonApiError::validation(details));
    }

    match state
        .products
        .create(&input.name, input.price, input.description.as_deref())
        .await
    {
        Ok(m) => {
            info!(id = m.id, name = %m.name, "created product");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) if e.is_validation() => Err(JsonApiError::validation(vec![e.to_string()])),
        Err(e) => {
            error!(err = %e, "create product failed");
            Err(JsonApiError::internal("Create Failed", e))
        }
    }
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Get Failed")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::product::Model>, JsonApiError> {
    match state.products.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(JsonApiError::product_not_found(id)),
        Err(e) => {
            error!(err = %e, id, "get product failed");
            Err(JsonApiError::internal("Get Failed", e))
        }
    }
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<models::product::Model>, JsonApiError> {
    let details = validate_input(&input);
    if !details.is_empty() {
        return Err(JsonApiError::validation(details));
    }

    match state
        .products
        .update(id, &input.name, input.price, input.description.as_deref())
        .await
    {
        Ok(m) => {
            info!(id = m.id, "updated product");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::product_not_found(id)),
        Err(e) if e.is_validation() => Err(JsonApiError::validation(vec![e.to_string()])),
        Err(e) => {
            error!(err = %e, id, "update product failed");
            Err(JsonApiError::internal("Update Failed", e))
        }
    }
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    match state.products.delete(id).await {
        Ok(true) => {
            info!(id, "deleted product");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(JsonApiError::product_not_found(id)),
        Err(e) => {
            error!(err = %e, id, "delete product failed");
            Err(JsonApiError::internal("Delete Failed", e))
        }
    }
}
