use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use auth_backend::{
    config::Config,
    handlers,
    middlewares::{TracingMiddleware, create_cors, json_config, normalize_errors, path_config, query_config},
    swagger::swagger_config,
};

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"service\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                SERVICE_NAME,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置,缺失必填项时直接失败退出
    let config = Config::from_env().expect("Failed to load configuration");

    let port = config.main_api.port;
    let env_name = config.env.clone();
    let base_url = config.main_api.external_url();
    let dashboards = config.dashboards.clone();

    log::info!(
        "🟢 {SERVICE_NAME} listening at {port} on {} 🟢",
        env_name.to_uppercase()
    );

    let app_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_config.clone()))
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .wrap(normalize_errors())
            .wrap(create_cors())
            .wrap(Logger::default())
            .wrap(TracingMiddleware::new(SERVICE_NAME, SERVICE_VERSION))
            .configure(swagger_config)
            .configure(handlers::health_config)
            .service(web::scope("/api").configure(handlers::status_config))
    })
    .bind(("0.0.0.0", port))?;

    log::info!("🔵 swagger listening at {base_url}/swagger-ui/");
    if let Some(url) = dashboards.redis_commander_url {
        log::info!("🔵 redis-commander listening at {url}");
    }
    if let Some(url) = dashboards.kibana_url {
        log::info!("🔵 kibana listening at {url}");
    }
    if let Some(url) = dashboards.jaeger_url {
        log::info!("🔵 jaeger listening at {url}");
    }

    server.run().await
}
