use crate::error::{MastermindError, Result};
use crate::game::FeedbackLayout;
use crate::model::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "mastermind.toml";

pub const CODE_LENGTH: usize = 4;
pub const MAX_ATTEMPTS: usize = 10;

/// Rules of a single game.
///
/// These are fixed constants for players; they are only varied
/// programmatically (tests, embedding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub code_length: usize,
    pub palette: Vec<Color>,
    pub max_attempts: usize,
    pub feedback: FeedbackLayout,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            palette: Color::CLASSIC.to_vec(),
            max_attempts: MAX_ATTEMPTS,
            feedback: FeedbackLayout::default(),
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            return Err(MastermindError::Config(
                "code_length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(MastermindError::Config(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(MastermindError::Config("palette is empty".to_string()));
        }
        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(MastermindError::Config(format!(
                    "palette lists {} twice",
                    color
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MastermindConfig {
    #[serde(default)]
    pub tui: TuiSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    #[serde(default = "default_confetti")]
    pub confetti: bool,
}

fn default_dark_mode() -> bool {
    false
}

fn default_confetti() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            confetti: default_confetti(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    /// Write JSON logs to this file (rotated daily)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,
}

impl MastermindConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// [`candidate_paths`](Self::candidate_paths) is used, falling back to
    /// defaults. Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(MastermindError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        match Self::find_config_file(cwd) {
            Some(path) => Ok((Self::load_from(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MastermindConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(cwd: &Path) -> Option<PathBuf> {
        Self::candidate_paths(cwd).into_iter().find(|p| p.exists())
    }

    /// Lookup order: working directory, then the platform config directory.
    pub fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
        if let Some(dir) = Self::user_config_dir() {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }
        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mastermind").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config, refusing to clobber an existing file.
    pub fn save_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(MastermindError::AlreadyExists(path.display().to_string()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
