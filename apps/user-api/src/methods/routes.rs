// Entity routes
pub const USERS_PATH: &str = "/users";
pub const USERS_BY_ID_PATH: &str = "/users/{id}";
pub const ROLES_PATH: &str = "/roles";

// Root-level service routes
pub const ROOT_PATH: &str = "/";
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_VERSION_PATH: &str = "/version";
pub const SERVICE_DOCS_PATH: &str = "/docs";
