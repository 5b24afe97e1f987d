//! Placeholder admin authentication
//!
//! The portfolio admin is a single identity with a single static token. The
//! provider trait keeps route logic ignorant of the mechanism so a real token
//! service can replace `StaticAuth` later.

/// Credential check and token verification for admin routes
pub trait AuthProvider: Send + Sync {
    /// Exchange credentials for a bearer token
    fn login(&self, email: &str, password: &str) -> Option<String>;

    /// Check a presented bearer token
    fn verify(&self, token: &str) -> bool;
}

/// Compares against configured constants; not a real authentication system
pub struct StaticAuth {
    email: String,
    password: String,
    token: String,
}

impl StaticAuth {
    pub fn new(email: &str, password: &str, token: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        }
    }
}

impl AuthProvider for StaticAuth {
    fn login(&self, email: &str, password: &str) -> Option<String> {
        if email == self.email && password == self.password {
            Some(self.token.clone())
        } else {
            None
        }
    }

    fn verify(&self, token: &str) -> bool {
        token == self.token
    }
}
