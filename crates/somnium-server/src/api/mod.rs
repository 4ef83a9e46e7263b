//! REST surface
//!
//! Thin axum layer over the dream store and interpretation engine. The
//! router is built from an injected [`state::AppState`] so tests can run it
//! over an in-memory store without a listener.

pub mod error;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use state::AppState;

/// Build the axum router with all API routes
pub fn build_router(state: AppState, port: u16) -> Router {
    let origins = vec![
        format!("http://127.0.0.1:{}", port)
            .parse::<axum::http::HeaderValue>()
            .expect("valid origin"),
        format!("http://localhost:{}", port)
            .parse::<axum::http::HeaderValue>()
            .expect("valid origin"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        // Dream CRUD
        .route(
            "/api/dreams",
            get(handlers::list_dreams).post(handlers::create_dream),
        )
        .route(
            "/api/dreams/{id}",
            get(handlers::get_dream)
                .put(handlers::update_dream)
                .delete(handlers::delete_dream),
        )
        // Search
        .route("/api/dreams/search/{query}", get(handlers::search_dreams))
        // Interpretation + visualization seed
        .route("/api/generate", post(handlers::generate_visualization))
        // Health
        .route("/api/health", get(handlers::health_check))
        .layer(ServiceBuilder::new().concurrency_limit(50).layer(cors))
        .with_state(state)
}

/// Bind and serve the API (blocking until shutdown)
pub async fn serve(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state, port);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Somnium API listening at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
