use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::HttpResponse;
use serde_json::json;

/// 把框架产生的裸错误响应(默认 404/405 等)改写成标准信封,
/// 已经是 JSON 的错误响应原样放行
pub fn normalize_errors<B>() -> ErrorHandlers<B>
where
    B: MessageBody + 'static,
{
    ErrorHandlers::new().default_handler(render_error)
}

fn render_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let already_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);

    if already_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let (req, _) = res.into_parts();
    let message = status.canonical_reason().unwrap_or("Unexpected error");
    let response = HttpResponse::build(status).json(json!({
        "success": false,
        "error": {
            "code": error_code(status),
            "message": message
        }
    }));

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

fn error_code(status: StatusCode) -> &'static str {
    if status == StatusCode::NOT_FOUND {
        "NOT_FOUND"
    } else if status == StatusCode::METHOD_NOT_ALLOWED {
        "METHOD_NOT_ALLOWED"
    } else if status == StatusCode::PRECONDITION_FAILED {
        "VALIDATION_ERROR"
    } else if status.is_client_error() {
        "BAD_REQUEST"
    } else {
        "INTERNAL_ERROR"
    }
}
