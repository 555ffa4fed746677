use axum::http::{header, HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use user_store::repository::user_repository::UserRepository;
use user_store::repository::user_role_repository::UserRoleRepository;
use user_store::user_service::UserService;
use user_store::util::connect_with_retry;

use user_api::app::build_router;
use user_api::config::MiddlewareConfig;
use user_api::constants::{DATABASE_URL, ENV, LOCAL_ENV, SERVICE, USER_API_PORT};
use user_api::shutdown::shutdown_signal;
use user_api::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Setup tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = std::env::var(ENV).unwrap_or_else(|_| LOCAL_ENV.to_string());

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    // Setup database pool and schema
    let database_url = std::env::var(DATABASE_URL)
        .map_err(|_| format!("{} environment variable must be set", DATABASE_URL))?;

    let pool = connect_with_retry(&database_url, 10).await?;

    user_store::MIGRATOR.run(&pool).await?;
    tracing::info!("database migrations applied");

    // Create shared service
    let user_service = UserService::new(
        UserRepository::new(pool.clone()),
        UserRoleRepository::new(pool),
    );

    let app_state = AppState {
        user_service: Arc::new(user_service),
        env: env.clone(),
    };

    let mut app = build_router(app_state);

    // ============================================
    // Middleware stack (applied inner to outer)
    // Order: Request → Timeout → CORS → Body Limit → Request ID → Trace → Handler
    // ============================================

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static("x-request-id");
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(middleware_config.max_body_size));

    // 4. CORS layer
    let cors_methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors_headers = [header::CONTENT_TYPE, header::AUTHORIZATION, x_request_id];
    let cors_layer = if middleware_config
        .cors_allowed_origins
        .contains(&"*".to_string())
    {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(cors_methods)
            .allow_headers(cors_headers)
    } else {
        let origins: Vec<HeaderValue> = middleware_config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(cors_methods)
            .allow_headers(cors_headers)
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (outermost)
    app = app.layer(TimeoutLayer::new(middleware_config.request_timeout));

    // Read port from env (default to 3333)
    let port: u16 = std::env::var(USER_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3333);

    let addr = format!("0.0.0.0:{}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(
        "user-api is ready to accept requests at: http://127.0.0.1:{}",
        port
    );

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
