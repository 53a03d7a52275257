use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::RelayError;
use crate::leta::LetaClient;

pub mod handlers;
pub mod models;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub leta: LetaClient,
}

impl AppState {
    pub fn new(config: Config) -> AppState {
        let leta = LetaClient::new(config.leta_url.clone());
        AppState { config, leta }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    // GET is the health probe and POST the search, on every path.
    let relay = get(handlers::health_handler).post(handlers::search_handler);

    Router::new()
        .route("/", relay.clone())
        .route("/*path", relay)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(cors),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    RelayError::Internal(detail).into_response()
}
