pub mod config;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router
///
/// Separated from `main` so integration tests can drive the router with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
}
