//! # Timetable API
//!
//! The web server for the school timetable service: public read endpoints
//! for every timetable view and the directory, and token-protected admin
//! endpoints for editing entries, teachers and classrooms.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: request extraction and response shaping
//! - **Middleware**: authentication and error mapping
//! - **Config**: environment configuration
//!
//! Business rules live in `timetable-core`; persistence is whatever
//! implements its store traits (`PgStore` in production).

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication and error handling
pub mod middleware;
/// Success envelope
pub mod response;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use timetable_core::{
    clock::Clock,
    store::{AdminStore, ClassroomStore, TeacherStore, TimetableStore},
    AdminService, DirectoryService, TimetableQueryEngine,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub query: TimetableQueryEngine,
    pub admin: AdminService,
    pub directory: DirectoryService,
    pub admins: Arc<dyn AdminStore>,
    /// Lifetime of newly issued login tokens
    pub session_ttl: chrono::Duration,
}

impl ApiState {
    /// Wires every service to one store.
    pub fn new<S>(store: Arc<S>, clock: Arc<dyn Clock>, session_ttl: chrono::Duration) -> Self
    where
        S: TimetableStore + TeacherStore + ClassroomStore + AdminStore + 'static,
    {
        Self {
            query: TimetableQueryEngine::new(store.clone(), clock),
            admin: AdminService::new(store.clone(), store.clone(), store.clone()),
            directory: DirectoryService::new(store.clone(), store.clone(), store.clone()),
            admins: store,
            session_ttl,
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Timetable views and entry management
        .merge(routes::timetable::routes())
        // Directory
        .merge(routes::teacher::routes())
        .merge(routes::classroom::routes())
        .merge(routes::grade::routes())
        // Admin login and registration
        .merge(routes::auth::routes())
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    match origins {
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin {:?}", origin);
                        None
                    }
                })
                .collect();
            cors.allow_origin(allowed).allow_credentials(true)
        }
        None => cors.allow_origin(Any),
    }
}

/// Starts the API server on top of the given store.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use timetable_api::{config::ApiConfig, start_server};
///
/// let config = ApiConfig::from_env()?;
/// let pool = timetable_db::create_pool(&config.database_url).await?;
/// start_server(config, Arc::new(timetable_db::PgStore::new(pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server<S>(config: config::ApiConfig, store: Arc<S>) -> Result<()>
where
    S: TimetableStore + TeacherStore + ClassroomStore + AdminStore + 'static,
{
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(
        store,
        Arc::new(timetable_core::clock::SystemClock),
        config.session_ttl(),
    ));

    let app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config.cors_origins.as_deref()))
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origins_are_skipped() {
        // Must not panic on a header value containing a newline.
        let origins = vec!["http://localhost:3000".to_string(), "bad\norigin".to_string()];
        let _ = cors_layer(Some(&origins));
        let _ = cors_layer(None);
    }
}
