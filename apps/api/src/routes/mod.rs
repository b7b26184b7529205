pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::sections::handlers::handle_generate_section;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/generate_resume_section", post(handle_generate_section))
        .with_state(state)
}
