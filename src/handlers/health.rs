use actix_web::{HttpResponse, Result, web};

use crate::models::*;

// 存活探针,不走全局 api 前缀
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
    })))
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
