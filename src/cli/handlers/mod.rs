mod configure;
mod generate;
mod play;
mod score;
mod tui;
mod utils;

pub use configure::{handle_config, handle_config_init};
pub use generate::handle_generate;
pub use play::{handle_play, run_play};
pub use score::handle_score;
pub use tui::handle_tui;

use crate::config::{GameSettings, MastermindConfig};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: MastermindConfig,
    pub config_path: Option<PathBuf>,
    pub settings: GameSettings,
}

impl CommandContext {
    pub fn new(config: MastermindConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            settings: GameSettings::default(),
        }
    }
}
