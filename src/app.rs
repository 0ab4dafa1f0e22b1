use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/dashboard.html", get(handlers::dashboard))
        .route("/balance", post(handlers::balance))
        .route("/tickets", post(handlers::tickets))
        .route("/tickets/buy", post(handlers::buy_tickets))
        .route("/about", post(handlers::about))
        .route("/api/view", get(handlers::view))
        .with_state(state)
}
