use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    email::{
        OutboundEmail,
        template::{self, Theme},
    },
    error::AppError,
    routes::AppState,
};

/// Contact form submission body. Every field is optional on the wire; a
/// missing field interpolates as the empty string.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SendEmailInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub theme: Option<String>,
}

/// POST /send-email
///
/// Relays the submission to the operator mailbox, then auto-replies to the
/// submitter. The two sends are strictly sequential: the acknowledgment is
/// only attempted once the notification has been accepted, and a failure at
/// either step surfaces the transport's error text as a 500. There is no
/// compensation; a notification that went out before an acknowledgment
/// failure stays sent.
pub async fn post_send_email(
    State(state): State<AppState>,
    Json(input): Json<SendEmailInput>,
) -> Result<String, AppError> {
    let theme = Theme::from_param(input.theme.as_deref());
    let operator = state.email.operator_address();

    let notification_html = template::render_notification(
        theme,
        &input.name,
        &input.email,
        &input.subject,
        &input.message,
        &state.firm,
    )?;

    let delivery = state
        .transport
        .send(&OutboundEmail {
            from: input.email.clone(),
            to: operator.to_string(),
            subject: format!("New Message from {} - {}", input.name, input.subject),
            html_body: notification_html,
        })
        .await?;

    tracing::info!(to = %operator, from = %input.email, "Contact notification sent");

    let acknowledgment_html = template::render_acknowledgment(theme, &input.name, &state.firm)?;

    state
        .transport
        .send(&OutboundEmail {
            from: operator.to_string(),
            to: input.email.clone(),
            subject: format!("Thank You for Reaching Out to {}", state.firm.name),
            html_body: acknowledgment_html,
        })
        .await?;

    tracing::info!(to = %input.email, "Acknowledgment sent");

    // The original service reports the notification's delivery response,
    // not the acknowledgment's
    Ok(format!("Email sent: {delivery}"))
}
