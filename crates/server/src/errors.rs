use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// JSON error response carrying an HTTP status, a message, and optional
/// structured details. All product handlers funnel failures through this.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: String,
    details: Option<serde_json::Value>,
}

impl JsonApiError {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self { status, message: message.into(), details }
    }

    /// 404 with the fixed not-found message for a product id.
    pub fn product_not_found(id: i32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("Product with id: {id} doesn't exist"),
            None,
        )
    }

    /// 422 listing every violated field constraint.
    pub fn validation(details: Vec<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(json!(details)))
    }

    pub fn internal(message: impl Into<String>, cause: impl ToString) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, Some(json!(cause.to_string())))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = json!({"error": self.message});
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}
