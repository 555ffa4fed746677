use axum::Json;
use serde_json::{json, Value};

use crate::methods::routes::{ROOT_PATH, SERVICE_HEALTH_PATH, SERVICE_VERSION_PATH};

#[utoipa::path(
    get,
    path = ROOT_PATH,
    responses(
        (status = 200, description = "Service greeting"),
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({"message": "Hello World"}))
}

#[utoipa::path(
    get,
    path = SERVICE_HEALTH_PATH,
    responses(
        (status = 200, description = "System is healthy"),
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

#[utoipa::path(
    get,
    path = SERVICE_VERSION_PATH,
    responses(
        (status = 200, description = "Service version"),
    )
)]
pub async fn get_version() -> Json<Value> {
    Json(json!({"version": env!("CARGO_PKG_VERSION")}))
}
