//! Simulated sign-in. Any non-blank email/password pair is accepted.

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn welcome(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome back!",
            AuthMode::SignUp => "Account created!",
        }
    }

    pub fn switch_hint(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Need an account? Sign up",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    email: String,
}

impl Session {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Local part of the email, used in the dashboard greeting.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

pub fn authenticate(credentials: &Credentials) -> Result<Session, AuthError> {
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    tracing::info!(email = %credentials.email, "session started");
    Ok(Session {
        email: credentials.email.trim().to_string(),
    })
}
