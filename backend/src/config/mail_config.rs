use std::env;
use std::fmt;

/// Value shipped in the sample `.env`. A deployment still carrying it was never configured.
pub const PLACEHOLDER_PASSWORD: &str = "sua_senha_de_app_do_gmail_aqui";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 587;

/// Outbound mail settings, read once at startup and handed to the contact handler.
#[derive(Clone, Debug, Default)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Validated subset of [`MailConfig`] needed to open an authenticated transport.
#[derive(Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredentials {
    User,
    Password,
    PlaceholderPassword,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("SMTP_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("SMTP_PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            secure: lookup("SMTP_SECURE").as_deref() == Some("true"),
            user: get("SMTP_USER"),
            password: get("SMTP_PASS"),
            from: get("MAIL_FROM"),
            to: get("MAIL_TO"),
        }
    }

    pub fn smtp_settings(&self) -> Result<SmtpSettings, MissingCredentials> {
        let user = self.user.clone().ok_or(MissingCredentials::User)?;
        let password = self.password.clone().ok_or(MissingCredentials::Password)?;
        if password == PLACEHOLDER_PASSWORD {
            return Err(MissingCredentials::PlaceholderPassword);
        }

        Ok(SmtpSettings {
            host: self.host.clone(),
            port: self.port,
            secure: self.secure,
            user,
            password,
        })
    }

    /// `MAIL_FROM`, falling back to the SMTP user.
    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref().or(self.user.as_deref())
    }

    pub fn recipients(&self) -> Option<&str> {
        self.to.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> MailConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MailConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 587);
        assert!(!config.secure);
        assert!(config.user.is_none());
        assert!(config.sender().is_none());
    }

    #[test]
    fn secure_only_for_literal_true() {
        assert!(config_from(&[("SMTP_SECURE", "true")]).secure);
        assert!(!config_from(&[("SMTP_SECURE", "TRUE")]).secure);
        assert!(!config_from(&[("SMTP_SECURE", "1")]).secure);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config_from(&[("SMTP_PORT", "465")]).port, 465);
        assert_eq!(config_from(&[("SMTP_PORT", "smtp")]).port, 587);
    }

    #[test]
    fn sender_falls_back_to_user() {
        let config = config_from(&[("SMTP_USER", "site@esfera.com.br")]);
        assert_eq!(config.sender(), Some("site@esfera.com.br"));

        let config = config_from(&[
            ("SMTP_USER", "site@esfera.com.br"),
            ("MAIL_FROM", "EsferaNR6 <contato@esfera.com.br>"),
        ]);
        assert_eq!(config.sender(), Some("EsferaNR6 <contato@esfera.com.br>"));
    }

    #[test]
    fn empty_mail_from_counts_as_unset() {
        let config = config_from(&[("SMTP_USER", "site@esfera.com.br"), ("MAIL_FROM", "")]);
        assert_eq!(config.sender(), Some("site@esfera.com.br"));
    }

    #[test]
    fn settings_require_user_and_real_password() {
        assert_eq!(
            config_from(&[("SMTP_PASS", "secret")]).smtp_settings(),
            Err(MissingCredentials::User)
        );
        assert_eq!(
            config_from(&[("SMTP_USER", "u@x.com")]).smtp_settings(),
            Err(MissingCredentials::Password)
        );
        assert_eq!(
            config_from(&[("SMTP_USER", "u@x.com"), ("SMTP_PASS", PLACEHOLDER_PASSWORD)])
                .smtp_settings(),
            Err(MissingCredentials::PlaceholderPassword)
        );

        let settings = config_from(&[
            ("SMTP_HOST", "smtp.gmail.com"),
            ("SMTP_USER", "u@x.com"),
            ("SMTP_PASS", "app-password"),
        ])
        .smtp_settings()
        .unwrap();
        assert_eq!(settings.host, "smtp.gmail.com");
        assert_eq!(settings.user, "u@x.com");
    }

    #[test]
    fn debug_output_hides_password() {
        let settings = config_from(&[("SMTP_USER", "u@x.com"), ("SMTP_PASS", "hunter2")])
            .smtp_settings()
            .unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
