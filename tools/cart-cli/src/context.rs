//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cart::config::StoreConfig;

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the config was read from; `None` for the built-in demo store.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, the nearest config file
    /// up the directory tree, or the demo store.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let config = StoreConfig::load(path)
                    .with_context(|| format!("Failed to load store config: {}", path))?;
                (config, Some(PathBuf::from(path)))
            }
            // Discovered files that fail to load are skipped so that
            // `config init --force` can replace them.
            None => match Self::find_config(&cwd) {
                Some(path) => match StoreConfig::load(&path) {
                    Ok(config) => (config, Some(path)),
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "ignoring unreadable store config"
                        );
                        output.warn(&format!(
                            "Ignoring unreadable store config {}: {:#}",
                            path.display(),
                            anyhow::Error::from(e)
                        ));
                        (StoreConfig::demo(), None)
                    }
                },
                None => (StoreConfig::demo(), None),
            },
        };

        match &config_path {
            Some(path) => tracing::debug!(path = %path.display(), "loaded store config"),
            None => tracing::debug!("no store config found, using demo store"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree.
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Human-readable description of where the config came from.
    pub fn config_source(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "built-in demo store".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("cart.toml"), "").unwrap();

        let found = Context::find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join("cart.toml"));
    }

    #[test]
    fn test_explicit_broken_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        std::fs::write(&path, "threshold = \"lots\"").unwrap();

        let result = Context::load(path.to_str(), Output::new(false, true));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.json"), "{}").unwrap();
        std::fs::write(dir.path().join("cart.toml"), "").unwrap();

        let found = Context::find_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("cart.toml"));
    }
}
