use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod error;
mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}
mod config {
    pub mod mail_config;
    pub mod server_config;
}
mod utils {
    pub mod mailer;
    pub mod email_templates;
}

use config::mail_config::MailConfig;
use config::server_config::ServerConfig;
use handlers::contact_handlers;
use utils::mailer::{Mailer, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub mail_config: MailConfig,
    pub mailer: Arc<dyn Mailer>,
}

pub fn create_router(state: Arc<AppState>, server_config: &ServerConfig) -> Router {
    let dist = &server_config.frontend_dist;
    let frontend = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the dev frontend runs on another port
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _sentry_guard = std::env::var("SENTRY_DSN")
        .ok()
        .filter(|dsn| !dsn.is_empty())
        .map(|dsn| {
            sentry::init((dsn, sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            }))
        });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env()?;
    let mail_config = MailConfig::from_env();
    if let Err(missing) = mail_config.smtp_settings() {
        tracing::warn!(
            "Mail transport not configured ({:?}); /api/contact will answer 500 until SMTP_USER and SMTP_PASS are set",
            missing
        );
    }
    if mail_config.recipients().is_none() {
        tracing::warn!("MAIL_TO is not set; contact emails will fail to send");
    }

    let state = Arc::new(AppState {
        mail_config,
        mailer: Arc::new(SmtpMailer),
    });

    let app = create_router(state, &server_config);

    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    tracing::info!(
        "Listening on {} (frontend from {})",
        server_config.addr,
        server_config.frontend_dist.display()
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
