pub mod create_user;
pub mod delete_user;
pub mod entities;
pub mod get_roles;
pub mod get_user_by_id;
pub mod get_users;
pub mod health_check;
pub mod routes;
pub mod update_user;
