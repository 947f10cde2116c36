pub mod environment;

use crate::config::environment::EnvironmentService;
use crate::utils::error::{LookupError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

/// Builds the layered configuration view: a required base JSON file, an
/// optional environment-named override file, then process environment
/// variables. Later sources override keys from earlier ones.
#[derive(Debug, Clone)]
pub struct ConfigurationService {
    environment: EnvironmentService,
    base_dir: Option<PathBuf>,
}

impl ConfigurationService {
    pub fn new(environment: EnvironmentService) -> Self {
        Self {
            environment,
            base_dir: None,
        }
    }

    /// Overrides the directory searched for `appsettings*.json`. Without it
    /// the process current directory is resolved lazily on first load.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn environment(&self) -> &EnvironmentService {
        &self.environment
    }

    /// Merges the three sources. Fails if `appsettings.json` is absent;
    /// the environment-specific file is optional. Environment variables use
    /// `__` as the hierarchy separator (`CONNECTIONSTRINGS__PRODUCTDB`
    /// overrides `ConnectionStrings.ProductDb`).
    pub fn load(&self) -> Result<Config> {
        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let settings = Config::builder()
            .add_source(File::from(base_dir.join("appsettings.json")).required(true))
            .add_source(
                File::from(base_dir.join(format!("appsettings.{}.json", self.environment.name())))
                    .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?;

        Ok(settings)
    }
}

/// Resolves `ConnectionStrings.<name>` from a loaded configuration.
pub fn connection_string(settings: &Config, name: &str) -> Result<String> {
    settings
        .get_string(&format!("ConnectionStrings.{name}"))
        .map_err(|_| LookupError::MissingConnectionString {
            name: name.to_string(),
        })
}
