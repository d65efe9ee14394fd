use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utils::mailer::MailError;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Preencha nome, e-mail e mensagem.")]
    Validation,

    #[error("Servidor de email não configurado. Configure o .env com sua senha de app do Gmail.")]
    Configuration,

    #[error("Falha ao enviar e-mail: {0}")]
    Delivery(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation => StatusCode::BAD_REQUEST,
            ContactError::Configuration | ContactError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<MailError> for ContactError {
    fn from(err: MailError) -> Self {
        ContactError::Delivery(err.to_string())
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ContactError::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ContactError::Configuration.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ContactError::Delivery("timeout".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn delivery_message_carries_details() {
        let err = ContactError::from(MailError::NoRecipients);
        assert_eq!(err.to_string(), "Falha ao enviar e-mail: No recipients defined");
    }
}
