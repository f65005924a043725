use super::types::Settings;
use super::{LOCAL_SETTINGS_FILE, USER_SETTINGS_FILE};
use crate::{CpuCompareError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Locates and reads the settings file
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    /// Path given on the command line; must exist when set
    explicit: Option<PathBuf>,
    /// Directory searched for `cpu-compare.yaml`
    working_dir: PathBuf,
    /// Per-user config directory, when the platform has one
    user_config_dir: Option<PathBuf>,
}

impl SettingsLoader {
    /// Loader rooted at the current directory and the platform config dir
    pub fn new() -> Result<Self> {
        let working_dir = std::env::current_dir().map_err(|e| {
            CpuCompareError::Config(format!("Failed to get current directory: {}", e))
        })?;
        let user_config_dir =
            ProjectDirs::from("", "", "cpu-compare").map(|dirs| dirs.config_dir().to_path_buf());

        Ok(Self {
            explicit: None,
            working_dir,
            user_config_dir,
        })
    }

    /// Use this settings file instead of searching
    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Settings file that `load` would read, if any
    pub fn locate(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(CpuCompareError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }

        let local = self.working_dir.join(LOCAL_SETTINGS_FILE);
        if local.is_file() {
            return Ok(Some(local));
        }

        Ok(self
            .user_config_dir
            .as_ref()
            .map(|dir| dir.join(USER_SETTINGS_FILE))
            .filter(|path| path.is_file()))
    }

    /// Read the first settings file found, or fall back to defaults
    pub fn load(&self) -> Result<Settings> {
        match self.locate()? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading settings");
                Self::load_file(&path)
            }
            None => {
                tracing::debug!("No settings file found, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Read one settings file.
    ///
    /// A relative `data_file` is resolved against the file's directory.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CpuCompareError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut settings = if contents.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml_ng::from_str::<Settings>(&contents)?
        };

        if settings.data_file.is_relative() {
            if let Some(parent) = path.parent() {
                settings.data_file = parent.join(&settings.data_file);
            }
        }

        Ok(settings)
    }
}
