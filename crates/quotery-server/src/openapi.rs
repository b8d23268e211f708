use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quotery API",
        version = "0.1.0",
        description = "CRUD access to a quote catalog ingested from a paginated public listing."
    ),
    paths(
        crate::routes::list_quotes,
        crate::routes::create_quote,
        crate::routes::update_quote,
        crate::routes::delete_quote,
        crate::routes::root,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::QuotePayload,
        crate::dto::QuoteResponse,
        crate::dto::MessageResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "quotes", description = "Quote catalog CRUD"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
