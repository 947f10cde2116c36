pub mod handler;
pub mod resolver;

pub use crate::core::handler::Function;
pub use crate::core::resolver::DependencyResolver;
