use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: u64, pub name: String }

/// `name` is required and at least 3 characters long.
#[derive(ToSchema)]
pub struct CreateCategoryRequestDoc { pub name: String }

/// `id` may be omitted; when present it must equal the path id.
#[derive(ToSchema)]
pub struct UpdateCategoryRequestDoc { pub id: Option<u64>, pub name: String }

#[derive(ToSchema)]
pub struct StatusResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDoc,
            CreateCategoryRequestDoc,
            UpdateCategoryRequestDoc,
            StatusResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories")
    )
)]
pub struct ApiDoc;
