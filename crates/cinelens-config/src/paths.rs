use anyhow::Result;
use dirs;
use std::path::{Path, PathBuf};

/// Get the container base path from environment variable, defaulting to "/app"
pub fn container_base_path() -> PathBuf {
    std::env::var("CINELENS_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/app"))
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("cinelens");

        Ok(Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir.join("data"),
            log_dir: base_dir.join("logs"),
        })
    }

    /// Root all paths under an explicit base directory. Used in containers
    /// and by tests that need an isolated store.
    pub fn with_base(base: &Path) -> Self {
        Self {
            config_dir: base.to_path_buf(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Current-user slot (single record, or absent).
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }

    /// Review table: movie id -> ordered review list.
    pub fn reviews_file(&self) -> PathBuf {
        self.data_dir.join("reviews.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("cinelens.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // A pre-existing container base directory indicates we're running
        // inside the container image, where paths are rooted at the base.
        let base = container_base_path();
        if base.exists() {
            return Self::with_base(&base);
        }

        // Otherwise, use platform-specific paths (e.g., ~/.config/cinelens on Linux)
        Self::new().unwrap_or_else(|_| Self::with_base(&base))
    }
}
