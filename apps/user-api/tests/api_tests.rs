use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use user_store::entities::{NewUser, User, UserPatch, UserRole};
use user_store::repository::errors::RepositoryError;
use user_store::repository::traits::{UserRepositoryTrait, UserRoleRepositoryTrait};
use user_store::user_service::UserService;

use user_api::app::build_router;
use user_api::state::AppState;

// ==================== MOCKS ====================

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepositoryTrait for UserRepo {
        async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError>;
        async fn get_user(&self, user_id: i64) -> Result<Option<User>, RepositoryError>;
        async fn get_users(&self) -> Result<Vec<User>, RepositoryError>;
        async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, RepositoryError>;
        async fn delete_user(&self, user_id: i64) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub RoleRepo {}

    #[async_trait]
    impl UserRoleRepositoryTrait for RoleRepo {
        async fn get_role(&self, role_id: i64) -> Result<Option<UserRole>, RepositoryError>;
        async fn get_roles(&self) -> Result<Vec<UserRole>, RepositoryError>;
    }
}

// ==================== TEST HELPERS ====================

fn test_app(user_repo: MockUserRepo, role_repo: MockRoleRepo) -> Router {
    let state = AppState {
        user_service: Arc::new(UserService::with_repos(
            Arc::new(user_repo),
            Arc::new(role_repo),
        )),
        env: "test".to_string(),
    };
    build_router(state)
}

fn sample_user(id: i64, role_id: Option<i64>) -> User {
    let now = Utc::now();
    User {
        id,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        first_name: "A".to_string(),
        last_name: "L".to_string(),
        active: true,
        created_at: now,
        updated_at: now,
        role_id,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ==================== SERVICE ROUTES ====================

#[tokio::test]
async fn test_root_returns_greeting() {
    let app = test_app(MockUserRepo::new(), MockRoleRepo::new());
    let (status, body) = send(app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(MockUserRepo::new(), MockRoleRepo::new());
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_version() {
    let app = test_app(MockUserRepo::new(), MockRoleRepo::new());
    let (status, body) = send(app, get("/version")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"version": "1.0.0"}));
}

// ==================== LIST ENDPOINTS ====================

#[tokio::test]
async fn test_list_roles_success() {
    let mut role_repo = MockRoleRepo::new();
    role_repo.expect_get_roles().times(1).returning(|| {
        Ok(vec![UserRole {
            id: 1,
            name: "admin".to_string(),
            description: "administrators".to_string(),
        }])
    });

    let app = test_app(MockUserRepo::new(), role_repo);
    let (status, body) = send(app, get("/roles")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "name": "admin", "description": "administrators"}]));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_users()
        .times(1)
        .returning(|| Ok(vec![sample_user(1, None), sample_user(2, Some(1))]));

    let app = test_app(user_repo, MockRoleRepo::new());
    let (status, body) = send(app, get("/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 2);
    // base fields only
    assert!(users[0].get("id").is_none());
    assert!(users[0].get("role_id").is_none());
    assert_eq!(users[0]["username"], "alice");
}

// ==================== RETRIEVE USER ====================

#[tokio::test]
async fn test_retrieve_user_success_includes_role() {
    let mut user_repo = MockUserRepo::new();
    let mut role_repo = MockRoleRepo::new();

    user_repo
        .expect_get_user()
        .times(1)
        .returning(|_| Ok(Some(sample_user(1, Some(2)))));

    role_repo.expect_get_role().times(1).returning(|_| {
        Ok(Some(UserRole {
            id: 2,
            name: "member".to_string(),
            description: "regular members".to_string(),
        }))
    });

    let app = test_app(user_repo, role_repo);
    let (status, body) = send(app, get("/users/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"]["name"], "member");
}

#[tokio::test]
async fn test_retrieve_user_not_found() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_user().times(1).returning(|_| Ok(None));

    let app = test_app(user_repo, MockRoleRepo::new());
    let (status, body) = send(app, get("/users/999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
}

// ==================== CREATE USER ====================

#[tokio::test]
async fn test_add_user_success() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_create_user()
        .withf(|new_user| new_user.username == "newuser" && new_user.role_id.is_none())
        .times(1)
        .returning(|new_user| {
            let now = Utc::now();
            Ok(User {
                id: 42,
                username: new_user.username,
                email: new_user.email,
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                active: new_user.active,
                created_at: now,
                updated_at: now,
                role_id: new_user.role_id,
            })
        });

    let app = test_app(user_repo, MockRoleRepo::new());
    let payload = json!({
        "username": "newuser",
        "email": "newuser@example.com",
        "first_name": "New",
        "last_name": "User",
        "role_id": null
    });
    let (status, body) = send(app, json_request("POST", "/users", &payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 42);
    assert_eq!(body["username"], "newuser");
    assert_eq!(body["active"], true);
    assert!(body["created_at"].is_string());
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_add_user_missing_field_is_unprocessable() {
    let app = test_app(MockUserRepo::new(), MockRoleRepo::new());
    let payload = json!({"username": "incompleteuser"});
    let (status, _body) = send(app, json_request("POST", "/users", &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ==================== UPDATE USER ====================

#[tokio::test]
async fn test_update_user_partial_payload() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_update_user()
        .withf(|user_id, patch| {
            *user_id == 1
                && patch.email.as_deref() == Some("a2@x.com")
                && patch.username.is_none()
                // role_id was not in the body, so it must not be touched
                && patch.role_id.is_none()
        })
        .times(1)
        .returning(|_, _| {
            let mut user = sample_user(1, None);
            user.email = "a2@x.com".to_string();
            Ok(user)
        });

    let app = test_app(user_repo, MockRoleRepo::new());
    let payload = json!({"email": "a2@x.com"});
    let (status, body) = send(app, json_request("PUT", "/users/1", &payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a2@x.com");
}

#[tokio::test]
async fn test_update_user_null_role_clears_assignment() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_update_user()
        .withf(|_, patch| patch.role_id == Some(None))
        .times(1)
        .returning(|_, _| Ok(sample_user(1, None)));

    let app = test_app(user_repo, MockRoleRepo::new());
    let payload = json!({"role_id": null});
    let (status, body) = send(app, json_request("PUT", "/users/1", &payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role_id"], Value::Null);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_update_user()
        .times(1)
        .returning(|_, _| Err(RepositoryError::NotFound));

    let app = test_app(user_repo, MockRoleRepo::new());
    let payload = json!({"username": "ghost"});
    let (status, body) = send(app, json_request("PUT", "/users/999999", &payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
}

// ==================== DELETE USER ====================

#[tokio::test]
async fn test_delete_user_success() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_delete_user()
        .times(1)
        .returning(|_| Ok(true));

    let app = test_app(user_repo, MockRoleRepo::new());
    let (status, body) = send(
        app,
        Request::builder()
            .method("DELETE")
            .uri("/users/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_delete_user()
        .times(1)
        .returning(|_| Err(RepositoryError::NotFound));

    let app = test_app(user_repo, MockRoleRepo::new());
    let (status, body) = send(
        app,
        Request::builder()
            .method("DELETE")
            .uri("/users/999999")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
}
