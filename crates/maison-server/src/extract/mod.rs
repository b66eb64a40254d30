//! Request extractors shared by all handlers.

mod json;
mod pg_pool;
mod validate_json;

pub use json::Json;
pub use pg_pool::PgPool;
pub use validate_json::ValidateJson;
