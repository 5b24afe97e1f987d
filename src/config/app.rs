//! Runtime configuration read from the process environment

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_CONTENT_PATH: &str = "data/posts.json";

/// Full server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind ("localhost" is accepted)
    pub host: String,
    pub port: u16,

    /// Path of the JSON content document
    pub content_path: PathBuf,

    /// Admin login constants and the fixed bearer token they map to
    pub admin_email: String,
    pub admin_password: String,
    pub admin_token: String,

    /// CORS origin allow-list; empty means permissive (local development)
    pub allowed_origins: Vec<String>,

    /// SMTP relay settings; absent disables the contact form
    pub smtp: Option<SmtpConfig>,
}

/// SMTP transport settings for the contact mailer
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Fixed recipient of contact-form mail
    pub recipient: String,
}

impl AppConfig {
    /// Read configuration from the environment at startup
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            content_path: content_path_from_env(),
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            admin_token: required("ADMIN_TOKEN")?,
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS").unwrap_or_default(),
            ),
            smtp: smtp_from_env()?,
        })
    }
}

/// Content document path; shared by the server and the CLI data commands
pub fn content_path_from_env() -> PathBuf {
    std::env::var("CONTENT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_PATH))
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("missing required env var {name}"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The SMTP block is all-or-nothing: a partial set of variables is a
/// configuration mistake, not a disabled mailer.
fn smtp_from_env() -> Result<Option<SmtpConfig>> {
    let vars = [
        std::env::var("SMTP_HOST"),
        std::env::var("SMTP_USER"),
        std::env::var("SMTP_PASS"),
        std::env::var("CONTACT_RECIPIENT"),
    ];

    if vars.iter().all(|v| v.is_err()) {
        return Ok(None);
    }
    let [host, username, password, recipient] = vars;
    match (host, username, password, recipient) {
        (Ok(host), Ok(username), Ok(password), Ok(recipient)) => Ok(Some(SmtpConfig {
            host,
            username,
            password,
            recipient,
        })),
        _ => bail!(
            "incomplete SMTP configuration: set all of SMTP_HOST, SMTP_USER, SMTP_PASS, CONTACT_RECIPIENT or none"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert!(parse_origins("").is_empty());
        assert_eq!(
            parse_origins("https://example.com"),
            vec!["https://example.com"]
        );
        assert_eq!(
            parse_origins(" https://a.dev , https://b.dev ,"),
            vec!["https://a.dev", "https://b.dev"]
        );
    }
}
