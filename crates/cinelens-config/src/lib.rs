pub mod config;
pub mod paths;

pub use config::{Config, ProviderConfig};
pub use paths::{container_base_path, PathManager};
