use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Redraws the grid in the terminal every frame.
    Console,
    /// One log line per frame.
    Log,
    /// Headless.
    None,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub clear_screen: bool,
    pub use_colors: bool,
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Console,
            clear_screen: true,
            use_colors: true,
        }
    }
}
