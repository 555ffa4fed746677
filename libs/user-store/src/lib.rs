pub mod entities;
pub mod errors_service;
pub mod repository;
pub mod user_service;
pub mod util;

pub use entities::*;
pub use errors_service::*;
pub use user_service::*;

/// Embedded schema migrations; the API runs these at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
