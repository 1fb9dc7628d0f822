//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Snapshot path given on the command line.
    snapshot_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, snapshot: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self::new(config, output, cwd, snapshot.map(PathBuf::from)))
    }

    pub(crate) fn new(
        config: CliConfig,
        output: Output,
        cwd: PathBuf,
        snapshot_override: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            output,
            cwd,
            snapshot_override,
        }
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some(config),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), "ignoring config: {:#}", e)
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the cart snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        match &self.snapshot_override {
            Some(path) => self.resolve_path(path),
            None => self.resolve_path(Path::new(&self.config.snapshot.path)),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
