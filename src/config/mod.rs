//! Configuration module

mod app;

pub use app::content_path_from_env;
pub use app::AppConfig;
pub use app::SmtpConfig;
