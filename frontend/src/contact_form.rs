use std::future::Future;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

pub const SENT_MESSAGE: &str = "✅ Mensagem enviada com sucesso!";
pub const FAILED_MESSAGE: &str = "❌ Não foi possível enviar.";
const UNKNOWN_ERROR: &str = "Erro desconhecido";

/// Every named field of the form, as typed.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// Honeypot. Hidden from people, so anything here came from a bot.
    pub website: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Sent,
    /// Non-2xx answer, with the server's `error` text when it gave one.
    Rejected(Option<String>),
    /// The request never got an answer.
    Network(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Sent => SubmitStatus::Sent,
            Outcome::Rejected(error) => {
                SubmitStatus::Failed(error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
            Outcome::Network(details) => {
                SubmitStatus::Failed(format!("Erro ao conectar com o servidor: {}", details))
            }
        }
    }
}

/// What the form shows. A submission in flight blocks the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub loading: bool,
    pub status: SubmitStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            loading: false,
            status: SubmitStatus::Idle,
        }
    }
}

impl FormState {
    /// State for a new submission, or `None` while one is still in flight.
    pub fn begin(&self) -> Option<FormState> {
        if self.loading {
            return None;
        }
        Some(FormState {
            loading: true,
            status: SubmitStatus::Idle,
        })
    }

    pub fn finish(status: SubmitStatus) -> FormState {
        FormState {
            loading: false,
            status,
        }
    }
}

/// Anything but whitespace in the honeypot marks a bot, same rule as the server.
pub fn honeypot_filled(fields: &ContactFields) -> bool {
    !fields.website.trim().is_empty()
}

/// Runs one submission through `send`. A filled honeypot ends it quietly
/// without calling `send` at all.
pub async fn submit<F, Fut>(fields: ContactFields, send: F) -> SubmitStatus
where
    F: FnOnce(ContactFields) -> Fut,
    Fut: Future<Output = Outcome>,
{
    if honeypot_filled(&fields) {
        log::info!("Honeypot filled, skipping contact request");
        return SubmitStatus::Idle;
    }
    SubmitStatus::from_outcome(send(fields).await)
}

pub async fn post_contact(fields: ContactFields) -> Outcome {
    let request = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(&fields)
    {
        Ok(request) => request,
        Err(e) => return Outcome::Network(e.to_string()),
    };

    match request.send().await {
        Ok(response) if response.ok() => Outcome::Sent,
        Ok(response) => {
            let error = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error);
            Outcome::Rejected(error)
        }
        Err(e) => Outcome::Network(e.to_string()),
    }
}
