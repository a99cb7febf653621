pub mod browse;
pub mod details;
pub mod discover;
pub mod genres;
pub mod profile;
pub mod render;
pub mod review;
pub mod search;
pub mod trailer;

use crate::output::{Output, OutputNotifier};
use anyhow::Result;
use cinelens_catalog::CatalogClient;
use cinelens_config::{Config, PathManager};
use cinelens_store::{ProfileStore, ReviewStore};
use std::sync::Arc;

/// Build a catalog client from config, with failure notices routed to the
/// terminal output.
pub fn catalog_client(output: &Output) -> Result<CatalogClient> {
    let paths = PathManager::default();
    let config = Config::load_with_env(&paths.config_file())?;
    config.validate()?;
    tracing::debug!("Using provider base URL {}", config.provider.base_url);

    let client = CatalogClient::with_base_url(&config.provider.api_key, &config.provider.base_url)
        .with_language(&config.provider.language)
        .with_notifier(Arc::new(OutputNotifier::new(*output)));
    Ok(client)
}

pub fn profile_store() -> Result<ProfileStore> {
    let paths = PathManager::default();
    paths.ensure_directories()?;
    Ok(ProfileStore::new(paths.profile_file()))
}

pub fn review_store() -> Result<ReviewStore> {
    let paths = PathManager::default();
    paths.ensure_directories()?;
    Ok(ReviewStore::new(paths.reviews_file()))
}
