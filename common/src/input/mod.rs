mod adapter;
mod direction_pad;
mod event;

pub use adapter::{ControlCommand, InputAdapter, InputReceiver};
pub use direction_pad::{DirectionPad, FrameLayout, RestartButton};
pub use event::{InputEvent, parse_line};
