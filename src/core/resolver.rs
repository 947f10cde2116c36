use crate::adapters::postgres::PgProductRepository;
use crate::config::environment::EnvironmentService;
use crate::config::{connection_string, ConfigurationService};
use crate::core::handler::Function;
use crate::utils::error::Result;
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;

/// Lookup name for the product store connection string
/// (`ConnectionStrings.ProductDb` in configuration).
pub const CONNECTION_NAME: &str = "ProductDb";

/// Composition root. Wires, once per process lifetime, the object graph
/// serving requests: environment detector, configuration resolver, connection
/// string, pool, repository, handler. The pool connects lazily; composition
/// configures the store but never opens a connection.
pub struct DependencyResolver {
    base_dir: Option<PathBuf>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn resolve(&self) -> Result<Function<PgProductRepository>> {
        let environment = EnvironmentService::from_env();
        tracing::debug!(environment = environment.name(), "resolving dependencies");

        let mut config_service = ConfigurationService::new(environment);
        if let Some(dir) = &self.base_dir {
            config_service = config_service.with_base_dir(dir);
        }

        let settings = config_service.load()?;
        let conn = connection_string(&settings, CONNECTION_NAME)?;

        let pool = PgPoolOptions::new().connect_lazy(&conn)?;
        Ok(Function::new(PgProductRepository::new(pool)))
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}
