pub mod cors;
pub mod errors;
pub mod tracing;
pub mod validation;

pub use cors::create_cors;
pub use errors::normalize_errors;
pub use tracing::{TracingMiddleware, get_trace_id};
pub use validation::{json_config, path_config, query_config};
