//! Request credentials
//!
//! The platform accepts either basic auth (account login and password)
//! or a pre-issued access token. Credentials are applied to every
//! outgoing request by the HTTP transport.

use reqwest::RequestBuilder;

/// Credentials attached to every API request
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// No authentication (useful against local mock servers)
    #[default]
    Anonymous,

    /// Account login and password (HTTP basic auth)
    Basic {
        /// Account login, usually `user@company`
        login: String,
        /// Account password
        password: String,
    },

    /// Pre-issued access token (bearer auth)
    Token(String),
}

impl Credentials {
    /// Create basic auth credentials
    pub fn basic(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Create bearer token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Apply these credentials to a request builder
    pub(crate) fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Anonymous => req,
            Self::Basic { login, password } => req.basic_auth(login, Some(password)),
            Self::Token(token) => req.bearer_auth(token),
        }
    }
}
