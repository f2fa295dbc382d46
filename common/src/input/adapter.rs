use tokio::sync::{mpsc, watch};

use crate::games::snake::Direction;
use crate::log_debug;
use super::direction_pad::FrameLayout;
use super::event::InputEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    Restart,
    /// Restart only if the current game has ended (restart button click).
    RestartIfOver,
    Quit,
}

/// Producer side handed to input providers. Directions go through a
/// single-slot `watch` channel, so a burst of classifier output between two
/// ticks collapses to the latest value. Control commands are queued and never
/// dropped.
#[derive(Clone)]
pub struct InputAdapter {
    direction_tx: watch::Sender<Option<Direction>>,
    control_tx: mpsc::UnboundedSender<ControlCommand>,
    layout: FrameLayout,
}

/// Consumer side owned by the session loop.
pub struct InputReceiver {
    pub(crate) directions: watch::Receiver<Option<Direction>>,
    pub(crate) controls: mpsc::UnboundedReceiver<ControlCommand>,
}

impl InputAdapter {
    pub fn channel(layout: FrameLayout) -> (InputAdapter, InputReceiver) {
        let (direction_tx, directions) = watch::channel(None);
        let (control_tx, controls) = mpsc::unbounded_channel();
        (
            InputAdapter {
                direction_tx,
                control_tx,
                layout,
            },
            InputReceiver {
                directions,
                controls,
            },
        )
    }

    /// Fire-and-forget. Overwrites any direction not yet seen by the loop.
    pub fn on_direction(&self, direction: Direction) {
        self.direction_tx.send_replace(Some(direction));
    }

    pub fn on_restart_requested(&self) {
        self.send_control(ControlCommand::Restart);
    }

    pub fn on_quit(&self) {
        self.send_control(ControlCommand::Quit);
    }

    pub fn dispatch(&self, event: InputEvent) {
        match event {
            InputEvent::Direction(direction) => self.on_direction(direction),
            InputEvent::Pointer { x, y } => {
                if let Some(direction) = self.layout.pad.direction_at(x, y) {
                    self.on_direction(direction);
                }
            }
            InputEvent::Click { x, y } => {
                if self.layout.restart_button.contains(x, y) {
                    self.send_control(ControlCommand::RestartIfOver);
                }
            }
            InputEvent::Restart => self.on_restart_requested(),
            InputEvent::Quit => self.on_quit(),
        }
    }

    fn send_control(&self, command: ControlCommand) {
        if self.control_tx.send(command).is_err() {
            log_debug!("Input dropped {:?}: game loop has stopped", command);
        }
    }
}
