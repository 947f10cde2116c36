use std::env;

/// Environment variable that selects the active environment name.
pub const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Environment name assumed when the variable is unset.
pub const DEFAULT_ENVIRONMENT: &str = "Production";

/// Detects the active environment name from the process environment.
#[derive(Debug, Clone)]
pub struct EnvironmentService {
    name: String,
}

impl EnvironmentService {
    /// Reads `APP_ENVIRONMENT` once; unset yields `"Production"`.
    pub fn from_env() -> Self {
        Self {
            name: env::var(ENVIRONMENT_VARIABLE).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
