pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::hiring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/generate-jd", post(handlers::handle_generate_jd))
        .route(
            "/screen-resume",
            post(handlers::handle_screen_resume).layer(upload_limit),
        )
        .route("/generate-questions", post(handlers::handle_generate_questions))
        .route("/evaluate", post(handlers::handle_evaluate))
        .route("/generate-feedback", post(handlers::handle_generate_feedback))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()), // TODO: restrict origins once the frontend host is fixed
        )
        .with_state(state)
}
