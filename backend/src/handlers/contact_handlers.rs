use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::{error, info, warn};

use crate::error::ContactError;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::utils::mailer::OutgoingEmail;
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ContactResponse>, ContactError> {
    let request = ContactRequest::from_body(&body);

    // Bots get the same answer as people, nothing is sent
    if request.honeypot_filled() {
        warn!("Dropping contact submission with filled honeypot");
        return Ok(Json(ContactResponse { ok: true }));
    }

    let submission = request.into_submission()?;

    let settings = state.mail_config.smtp_settings().map_err(|missing| {
        error!("Mail transport not configured ({:?}), set SMTP_USER and SMTP_PASS", missing);
        ContactError::Configuration
    })?;

    info!(
        host = %settings.host,
        port = settings.port,
        user = %settings.user,
        "Configuring mail transport"
    );
    let transport = state.mailer.connect(&settings).map_err(|e| {
        error!("Failed to build mail transport: {}", e);
        ContactError::from(e)
    })?;

    transport.verify().await.map_err(|e| {
        error!("SMTP connection check failed: {}", e);
        ContactError::from(e)
    })?;
    info!("SMTP connection verified");

    let from = state.mail_config.sender().unwrap_or(settings.user.as_str());
    let email = OutgoingEmail::for_submission(&submission, from, state.mail_config.recipients());
    transport.send(email).await.map_err(|e| {
        error!("Failed to send contact email: {}", e);
        ContactError::from(e)
    })?;

    info!("Contact email sent for {}", submission.email);
    Ok(Json(ContactResponse { ok: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mail_config::{MailConfig, PLACEHOLDER_PASSWORD};
    use crate::utils::mailer::{MailError, MailTransport, MockMailTransport, MockMailer};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn mail_config(password: &str) -> MailConfig {
        MailConfig {
            host: "smtp.gmail.com".into(),
            port: 587,
            secure: false,
            user: Some("site@esferanr6.com.br".into()),
            password: Some(password.into()),
            from: None,
            to: Some("comercial@esferanr6.com.br".into()),
        }
    }

    fn router(mail_config: MailConfig, mailer: MockMailer) -> Router {
        let state = Arc::new(AppState {
            mail_config,
            mailer: Arc::new(mailer),
        });
        Router::new()
            .route("/api/contact", post(submit_contact))
            .with_state(state)
    }

    async fn post_contact(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_body() -> String {
        json!({
            "name": "Marcos Lima",
            "email": "marcos@empreiteira.com.br",
            "phone": "+55 21 99999-0000",
            "message": "Quero uma demonstração.\nObrigado."
        })
        .to_string()
    }

    fn unreachable_mailer() -> MockMailer {
        let mut mailer = MockMailer::new();
        mailer.expect_connect().never();
        mailer
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        for body in [
            json!({"email": "a@b.com", "message": "oi"}),
            json!({"name": "Ana", "message": "oi"}),
            json!({"name": "Ana", "email": "a@b.com", "message": ""}),
        ] {
            let app = router(mail_config("app-password"), unreachable_mailer());
            let (status, json) = post_contact(app, &body.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json, json!({"error": "Preencha nome, e-mail e mensagem."}));
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_a_validation_error() {
        let app = router(mail_config("app-password"), unreachable_mailer());
        let (status, _) = post_contact(app, "name=Ana&email=a@b.com").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn placeholder_password_never_touches_transport() {
        let app = router(mail_config(PLACEHOLDER_PASSWORD), unreachable_mailer());
        let (status, json) = post_contact(app, &valid_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Servidor de email não configurado"));
    }

    #[tokio::test]
    async fn missing_user_is_a_configuration_error() {
        let mut config = mail_config("app-password");
        config.user = None;
        let app = router(config, unreachable_mailer());
        let (status, _) = post_contact(app, &valid_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn valid_submission_verifies_and_sends_once() {
        let mut transport = MockMailTransport::new();
        transport.expect_verify().times(1).returning(|| Ok(()));
        transport
            .expect_send()
            .times(1)
            .withf(|email: &OutgoingEmail| {
                email.reply_to == "marcos@empreiteira.com.br"
                    && email.from == "site@esferanr6.com.br"
                    && email.to.as_deref() == Some("comercial@esferanr6.com.br")
                    && email.subject == "Novo contato pelo site"
                    && email.text.contains("Telefone: +55 21 99999-0000")
                    && email.html.contains("Quero uma demonstração.<br/>Obrigado.")
            })
            .returning(|_| Ok(()));

        let mut mailer = MockMailer::new();
        mailer
            .expect_connect()
            .times(1)
            .withf(|settings| settings.user == "site@esferanr6.com.br" && settings.port == 587)
            .return_once(move |_| Ok(Box::new(transport) as Box<dyn MailTransport>));

        let app = router(mail_config("app-password"), mailer);
        let (status, json) = post_contact(app, &valid_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"ok": true}));
    }

    #[tokio::test]
    async fn verification_failure_skips_send() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_verify()
            .times(1)
            .returning(|| Err(MailError::Unverified));
        transport.expect_send().never();

        let mut mailer = MockMailer::new();
        mailer
            .expect_connect()
            .return_once(move |_| Ok(Box::new(transport) as Box<dyn MailTransport>));

        let app = router(mail_config("app-password"), mailer);
        let (status, json) = post_contact(app, &valid_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json["error"],
            "Falha ao enviar e-mail: SMTP server rejected the connection test"
        );
    }

    #[tokio::test]
    async fn send_failure_reports_details() {
        let mut transport = MockMailTransport::new();
        transport.expect_verify().returning(|| Ok(()));
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::NoRecipients));

        let mut mailer = MockMailer::new();
        mailer
            .expect_connect()
            .return_once(move |_| Ok(Box::new(transport) as Box<dyn MailTransport>));

        let mut config = mail_config("app-password");
        config.to = None;
        let app = router(config, mailer);
        let (status, json) = post_contact(app, &valid_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Falha ao enviar e-mail: No recipients defined");
    }

    #[tokio::test]
    async fn numeric_phone_is_sent_as_text() {
        let mut transport = MockMailTransport::new();
        transport.expect_verify().returning(|| Ok(()));
        transport
            .expect_send()
            .times(1)
            .withf(|email: &OutgoingEmail| {
                email.reply_to == "ana@obra.com.br" && email.text.contains("Telefone: 21999990000")
            })
            .returning(|_| Ok(()));

        let mut mailer = MockMailer::new();
        mailer
            .expect_connect()
            .times(1)
            .return_once(move |_| Ok(Box::new(transport) as Box<dyn MailTransport>));

        let body = r#"{"name":"Ana","email":"ana@obra.com.br","phone":21999990000,"message":"oi"}"#;
        let app = router(mail_config("app-password"), mailer);
        let (status, json) = post_contact(app, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"ok": true}));
    }

    #[tokio::test]
    async fn filled_honeypot_is_acknowledged_without_sending() {
        let body = json!({
            "name": "Bot",
            "email": "bot@spam.io",
            "message": "buy now",
            "website": "http://spam.io"
        });
        let app = router(mail_config("app-password"), unreachable_mailer());
        let (status, json) = post_contact(app, &body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"ok": true}));
    }
}
