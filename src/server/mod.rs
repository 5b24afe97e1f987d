//! HTTP API server

mod auth;
mod contact;
mod error;
mod posts;

pub use error::{ApiError, ApiResult};

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::AuthProvider;
use crate::config::AppConfig;
use crate::mailer::Mailer;
use crate::store::ContentStore;

/// Shared server state: the injected collaborators behind every route
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub mailer: Arc<dyn Mailer>,
    /// Serializes the read-modify-write cycle of the mutating handlers
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ContentStore>,
        auth: Arc<dyn AuthProvider>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            store,
            auth,
            mailer,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/posts", get(posts::list).post(posts::create))
        .route(
            "/api/posts/:slug",
            get(posts::get_one)
                .put(posts::update)
                .delete(posts::remove),
        )
        .route("/send-message", post(contact::send_message))
        .with_state(state)
}

/// Start the API server
pub async fn start(config: &AppConfig, state: AppState) -> Result<()> {
    let app = router(state)
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if config.host == "localhost" {
        "127.0.0.1"
    } else {
        config.host.as_str()
    };
    let addr: SocketAddr = format!("{}:{}", bind_ip, config.port).parse()?;

    println!("API server running at http://{}:{}", config.host, config.port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// An empty allow-list means permissive CORS (local development)
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let list = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(list))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
