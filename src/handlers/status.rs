use actix_web::{HttpResponse, Result, web};

use crate::config::Config;
use crate::models::*;

#[utoipa::path(
    get,
    path = "/status",
    tag = "status",
    responses(
        (status = 200, description = "获取服务状态成功", body = ServiceStatusApiResponse)
    )
)]
pub async fn get_status(config: web::Data<Config>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(ServiceStatus {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        env: config.env.clone(),
    })))
}

pub fn status_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(get_status));
}
