use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{EmailConfig, FirmConfig},
    email::MailTransport,
};

mod contact;
mod health;

pub use contact::SendEmailInput;

#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn MailTransport>,
    pub email: EmailConfig,
    pub firm: FirmConfig,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/send-email", post(contact::post_send_email))
        .with_state(app_state)
        // The form is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
