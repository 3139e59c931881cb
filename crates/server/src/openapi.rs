use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductInputDoc,
            ProductDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
