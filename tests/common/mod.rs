use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::Router;
use contact_relay::{
    AppState,
    config::{EmailConfig, FirmConfig},
    email::{MailTransport, OutboundEmail, TransportError},
};

pub const OPERATOR: &str = "operator@sifranilaw.com";

/// Transport double that records every outbound message and pops scripted
/// results; unscripted sends succeed with a canned SMTP response.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutboundEmail>>,
    responses: Mutex<VecDeque<Result<String, String>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the outcome of the next send.
    pub fn script(&self, result: Result<&str, &str>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(result.map(str::to_string).map_err(str::to_string));
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(email.clone());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(TransportError::Rejected(reason)),
            None => Ok("250 2.0.0 OK".to_string()),
        }
    }
}

pub fn create_test_app(transport: Arc<RecordingTransport>) -> Router {
    let state = AppState {
        transport,
        email: EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: OPERATOR.to_string(),
            smtp_password: String::new(),
            operator_email: String::new(),
        },
        firm: FirmConfig::default(),
    };

    contact_relay::create_app(state)
}
