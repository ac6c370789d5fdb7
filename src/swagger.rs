use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

pub const SWAGGER_UI_ROOT: &str = "/swagger-ui";
pub const OPENAPI_DOC_PATH: &str = "/api-docs/openapi.json";

// info 留空,标题/描述/版本直接取包元数据
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::status::get_status,
    ),
    components(
        schemas(
            HealthStatus,
            ServiceStatus,
            ApiError,
            HealthApiResponse,
            ServiceStatusApiResponse,
        )
    ),
    tags(
        (name = "status", description = "Service status API"),
    ),
    servers(
        (url = "/api", description = "Main API server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_DOC_PATH, ApiDoc::openapi()),
    )
    .route(
        SWAGGER_UI_ROOT,
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
