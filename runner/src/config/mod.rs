mod input_config;
mod main_config;
mod render_config;

pub use input_config::InputConfig;
pub use main_config::{Config, get_config_manager};
pub use render_config::{RenderConfig, RenderMode};
