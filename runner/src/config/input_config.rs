use common::config::Validate;
use common::input::FrameLayout;
use serde::{Deserialize, Serialize};

/// Size of the frame pointer coordinates refer to (the camera image in the
/// gesture setup).
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub frame_width: i32,
    pub frame_height: i32,
}

impl InputConfig {
    pub fn frame_layout(&self) -> FrameLayout {
        FrameLayout::new(self.frame_width, self.frame_height)
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.frame_width < 10 || self.frame_height < 10 {
            return Err("input frame must be at least 10x10".to_string());
        }
        if self.frame_width > 10_000 || self.frame_height > 10_000 {
            return Err("input frame must not exceed 10000x10000".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
        }
    }
}
