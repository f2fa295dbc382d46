mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::{FrameBroadcaster, WatchBroadcaster};
pub use session_rng::SessionRng;
