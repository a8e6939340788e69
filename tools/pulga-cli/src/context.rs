//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use pulga_cache::{FileStore, SessionStore};
use pulga_client::{Navigator, StorefrontApi, StorefrontView};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration (file, environment, env vars).
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from the config file.
    pub fn load(config_path: Option<&str>, env: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(env) = env {
            config = config.for_environment(env)?;
        }
        config.apply_env(|name| std::env::var(name).ok());

        tracing::debug!(
            path = ?config_path,
            env,
            api_url = %config.api.api_url,
            "configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Persistent token store.
    pub fn session_store(&self) -> Result<SessionStore> {
        let path = self.config.store_path();
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open session store: {}", path.display()))?;
        self.output
            .debug(&format!("Session store: {}", path.display()));
        Ok(SessionStore::new(Arc::new(store)))
    }

    /// API client carrying the stored tokens.
    pub fn api(&self) -> Result<StorefrontApi> {
        self.output.debug(&format!("API: {}", self.config.api.api_url));
        Ok(StorefrontApi::new(self.config.api.clone(), self.session_store()?))
    }

    /// View state owner wired to the terminal.
    pub fn view(&self) -> Result<StorefrontView> {
        let navigator = TerminalNavigator {
            output: self.output.clone(),
        };
        Ok(StorefrontView::new(self.api()?, Arc::new(navigator)))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// A terminal cannot open pages, so navigation prints the URL.
struct TerminalNavigator {
    output: Output,
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        self.output.link(url);
    }
}
