//! Forum API server entry-point.
//!
//! config → tracing → database pool → migrations → adapters → router → serve

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use http::{header, HeaderValue, Method};
use secrecy::SecretString;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use forum_api::adapters::http::AuthState;
use forum_api::adapters::{
    forum_router, ForumHandlers, JwtSessionValidator, PostgresCommentRepository,
    PostgresThreadRepository, PostgresUserRepository, UuidIdGenerator,
};
use forum_api::config::{AppConfig, ServerConfig};
use forum_api::ports::IdGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    info!(max_connections = config.database.max_connections, "database pool ready");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrations applied");
    }

    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
    let handlers = ForumHandlers::from_ports(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresThreadRepository::new(pool.clone(), ids.clone())),
        Arc::new(PostgresCommentRepository::new(pool, ids)),
    );
    let validator: AuthState = Arc::new(JwtSessionValidator::new(SecretString::new(
        config.auth.access_token_key.clone(),
    )));

    let app = forum_router(handlers, validator).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(CompressionLayer::new())
            .layer(cors_layer(&config.server)),
    )
    .layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "forum api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let result = if server.is_production() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
