//! folio-rs: backend for a personal portfolio site
//!
//! This crate provides the blog content store (a JSON flat file), the CRUD
//! HTTP API over it, a placeholder admin auth and a contact-form mailer.

pub mod auth;
pub mod commands;
pub mod config;
pub mod content;
pub mod mailer;
pub mod server;
pub mod store;

use anyhow::Result;
use std::sync::Arc;

use crate::auth::StaticAuth;
use crate::config::AppConfig;
use crate::mailer::{Mailer, NoopMailer, SmtpMailer};
use crate::server::AppState;
use crate::store::JsonFileStore;

/// The main application handle
#[derive(Clone)]
pub struct Folio {
    /// Runtime configuration
    pub config: AppConfig,
}

impl Folio {
    /// Create an instance from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            config: AppConfig::from_env()?,
        })
    }

    /// Open the configured content store
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.config.content_path)
    }

    /// Assemble server state from the configured collaborators
    pub fn server_state(&self) -> Result<AppState> {
        let store = Arc::new(self.store());
        let auth = Arc::new(StaticAuth::new(
            &self.config.admin_email,
            &self.config.admin_password,
            &self.config.admin_token,
        ));
        let mailer: Arc<dyn Mailer> = match &self.config.smtp {
            Some(smtp) => Arc::new(SmtpMailer::new(smtp)?),
            None => {
                tracing::warn!("SMTP not configured; contact form will report failure");
                Arc::new(NoopMailer)
            }
        };
        Ok(AppState::new(store, auth, mailer))
    }

    /// Run the API server
    pub async fn serve(&self) -> Result<()> {
        let state = self.server_state()?;
        server::start(&self.config, state).await
    }
}
