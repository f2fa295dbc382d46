use std::future::Future;

use tokio::sync::watch;

use super::snake::GameSnapshot;

/// Render port. Receives a snapshot after every tick and every restart.
/// Implementations must return promptly: the tick loop awaits each frame
/// before scheduling the next tick.
pub trait FrameBroadcaster: Send + Sync + 'static {
    fn broadcast_frame(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}

/// Publishes the latest frame into a `watch` channel. Slow readers only ever
/// see the newest snapshot, so the loop never waits on them.
pub struct WatchBroadcaster {
    sender: watch::Sender<Option<GameSnapshot>>,
}

impl WatchBroadcaster {
    pub fn new() -> (Self, watch::Receiver<Option<GameSnapshot>>) {
        let (sender, receiver) = watch::channel(None);
        (Self { sender }, receiver)
    }
}

impl FrameBroadcaster for WatchBroadcaster {
    async fn broadcast_frame(&self, snapshot: GameSnapshot) {
        self.sender.send_replace(Some(snapshot));
    }
}
