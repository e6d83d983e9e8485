use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use embedscope_types::{Architecture, ui::UiOptions};

/// Environment variable that picks the initial architecture when the config doesn't.
pub const MODEL_ENV_VAR: &str = "EMBEDSCOPE_MODEL";

/// Contents of `~/.embedscope/config.toml`.
///
/// ```toml
/// [app]
/// model = "cbow"
/// autoplay = false
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct EmbedscopeConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Initial architecture id (`skipgram`, `cbow`, `fasttext`, `elmo`).
    pub model: Option<String>,
    /// Start playing as soon as the UI comes up.
    #[serde(default)]
    pub autoplay: bool,
    /// Use ASCII-only glyphs for neurons, arrows and buttons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable highlight fades.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl EmbedscopeConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.autoplay)
    }

    /// The configured initial architecture. Unknown ids are logged and ignored.
    #[must_use]
    pub fn initial_architecture(&self) -> Option<Architecture> {
        let raw = self.app.as_ref().and_then(|app| app.model.as_deref())?;
        match raw.parse() {
            Ok(architecture) => Some(architecture),
            Err(err) => {
                tracing::warn!("Ignoring model in config: {err}");
                None
            }
        }
    }
}

/// Initial architecture from `EMBEDSCOPE_MODEL`, if set to a known id.
#[must_use]
pub fn architecture_from_env() -> Option<Architecture> {
    let raw = env::var(MODEL_ENV_VAR).ok()?;
    match raw.parse() {
        Ok(architecture) => Some(architecture),
        Err(err) => {
            tracing::warn!("Ignoring {MODEL_ENV_VAR}: {err}");
            None
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".embedscope").join("config.toml"))
}
