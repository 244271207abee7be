//! HTTP Server implementation
//!
//! This module provides the HTTP server using Axum framework with:
//! - Configurable host/port binding
//! - Graceful shutdown handling
//! - Per-request time budget
//! - CORS support
//! - Static documentation serving

use crate::api::handlers::AppState;
use crate::api::routes::build_api_routes;
use crate::auth::jwt::TokenService;
use crate::core::config::{Config, ServerConfig};
use crate::core::error::ErrorResponse;
use crate::db::manager::DatabaseManager;
use crate::db::repository::{FavoriteRepository, MovieRepository, UserRepository};
use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    response::IntoResponse,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// HTTP API Server
pub struct ApiServer {
    router: Router,
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new API server with the given configuration and database manager
    pub fn new(config: Config, db: Arc<DatabaseManager>) -> anyhow::Result<Self> {
        let server_config = config.server.clone();

        let router = Self::build_router(config, db);

        Ok(Self {
            router,
            config: server_config,
        })
    }

    /// Build the Axum router with all routes and middleware
    fn build_router(config: Config, db: Arc<DatabaseManager>) -> Router {
        // Create repositories
        let movie_repo = Arc::new(MovieRepository::new(db.clone()));
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let favorite_repo = Arc::new(FavoriteRepository::new(db));

        // The token service owns the signing secret; nothing else sees it
        let tokens = Arc::new(TokenService::new(
            &config.security.jwt_secret,
            config.security.token_ttl_days,
        ));

        // Create application state
        let app_state = AppState {
            movie_repo,
            user_repo,
            favorite_repo,
            tokens,
        };

        let api_router = build_api_routes(app_state);

        // Static file serving for the API documentation
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());
        let serve_dir = ServeDir::new(&static_dir)
            .not_found_service(ServeFile::new(format!("{}/documentation.html", static_dir)));

        // Apply global middleware layers
        api_router.fallback_service(serve_dir).layer(
            ServiceBuilder::new()
                // Add tracing for all requests
                .layer(TraceLayer::new_for_http())
                // Add CORS support
                .layer(Self::build_cors_layer(&config.security.allowed_origins))
                // Per-request time budget; an over-budget request gets 408
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(config.server.request_timeout)),
        )
    }

    /// Build CORS layer from allowed origins configuration
    fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
        use tower_http::cors::Any;

        let cors = CorsLayer::new();

        // If allowed_origins contains "*", allow any origin
        if allowed_origins.contains(&"*".to_string()) {
            cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
        } else {
            let origins: Vec<_> = allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            cors.allow_origin(origins).allow_methods(Any).allow_headers(Any)
        }
    }

    /// Start the HTTP server and listen for requests
    ///
    /// This method will block until the server is shut down gracefully.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let socket_addr: SocketAddr = addr.parse()?;

        info!(
            host = %self.config.host,
            port = self.config.port,
            request_timeout = self.config.request_timeout,
            "Starting HTTP server"
        );

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;

        info!(addr = %socket_addr, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server shut down gracefully");

        Ok(())
    }

    /// Get a reference to the router
    pub fn router(&self) -> &Router {
        &self.router
    }
}

/// Translate middleware-stack failures into API responses
async fn handle_middleware_error(err: BoxError) -> impl IntoResponse {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::new(
                "Timeout".to_string(),
                "Request exceeded the time budget".to_string(),
            )),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(
                "DependencyError".to_string(),
                "Internal server error".to_string(),
            )),
        )
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Initiating graceful shutdown...");
}
