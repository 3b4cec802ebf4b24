//! Deployment environment toggle.
//!
//! The only runtime switch the service has: in `production` the
//! documentation endpoints are hidden.

use std::fmt;

/// Name of the environment variable holding the deployment environment.
pub const ENV_VAR: &str = "ENV";

/// Deployment environment, read from the `ENV` variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Default when `ENV` is unset.
    #[default]
    Development,
    /// `ENV=production`. Hides documentation.
    Production,
    /// Any other value, kept verbatim.
    Other(String),
}

impl Environment {
    /// Read the environment from the `ENV` variable, defaulting to
    /// [`Environment::Development`] when it is unset.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .map(|value| Self::from(value.as_str()))
            .unwrap_or_default()
    }

    /// Whether documentation endpoints should be served.
    pub fn docs_visible(&self) -> bool {
        !matches!(self, Self::Production)
    }

    /// The environment name as it appears in `ENV`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Environment {
    /// Exact, case-sensitive match: only `production` is production.
    fn from(value: &str) -> Self {
        match value {
            "development" => Self::Development,
            "production" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
