use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Remark API",
        version = "0.1.0",
        description = "Comment storage service — list and delete comment documents."
    ),
    paths(
        crate::routes::list_comments,
        crate::routes::delete_comment,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CommentResponse,
        crate::dto::DeleteResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "comments", description = "Comment collection"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
