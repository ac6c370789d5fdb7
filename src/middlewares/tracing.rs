use std::future::{Ready, ready};
use std::time::Instant;

use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// 请求追踪标识,放进请求扩展供下游读取
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

pub struct TracingMiddleware {
    app: &'static str,
    version: &'static str,
}

impl TracingMiddleware {
    pub fn new(app: &'static str, version: &'static str) -> Self {
        Self { app, version }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TracingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TracingMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingMiddlewareService {
            service,
            app: self.app,
            version: self.version,
        }))
    }
}

pub struct TracingMiddlewareService<S> {
    service: S,
    app: &'static str,
    version: &'static str,
}

impl<S, B> Service<ServiceRequest> for TracingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 透传上游的 trace id,没有就生成一个
        let trace_id = req
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let app = self.app;
        let version = self.version;
        let method = req.method().to_string();
        let path = req.path().to_string();
        let start = Instant::now();

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let elapsed = start.elapsed();

            if let Ok(value) = HeaderValue::from_str(&trace_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }

            log::info!(
                "[{app}@{version}] {method} {path} -> {status} ({elapsed}ms) trace_id={trace_id}",
                status = res.status().as_u16(),
                elapsed = elapsed.as_millis(),
            );

            Ok(res)
        })
    }
}

/// 读取当前请求的 trace id
pub fn get_trace_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<TraceId>().map(|t| t.0.clone())
}
