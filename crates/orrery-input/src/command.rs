//! Commands produced by the input collaborator and drained by the update loop.

use crossbeam_channel::{Receiver, Sender, unbounded};

/// One user gesture, serialized onto the update thread.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Explicit selection of a body from the enumerated list.
    FocusBody {
        /// Lowercase body id.
        id: String,
    },
    /// Pointer click at a position in normalized device coordinates.
    PointerPick {
        /// Horizontal NDC in `[-1, 1]`.
        ndc_x: f64,
        /// Vertical NDC in `[-1, 1]`, +y up.
        ndc_y: f64,
    },
    /// Speed multiplier change from the slider.
    SetSpeed {
        /// New multiplier; bounds are the input control's concern.
        multiplier: f64,
    },
    /// Window resize. Consumed by the host for the camera aspect ratio,
    /// not by the simulation core.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Clonable producer handle, safe to hand to any event-dispatch thread.
#[derive(Clone, Debug)]
pub struct CommandSender {
    sender: Sender<Command>,
}

impl CommandSender {
    /// Enqueue a command. Dropped silently (with a warning) if the update
    /// loop has already shut down.
    pub fn send(&self, command: Command) {
        if self.sender.send(command).is_err() {
            tracing::warn!("command dropped: update loop receiver is gone");
        }
    }
}

/// Single-consumer command queue owned by the update loop.
#[derive(Debug)]
pub struct CommandQueue {
    sender: Sender<Command>,
    receiver: Receiver<Command>,
}

impl CommandQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// A new producer handle for event sources.
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            sender: self.sender.clone(),
        }
    }

    /// Drain every command queued since the last drain, in send order.
    /// Non-blocking; called once per tick.
    pub fn drain(&mut self) -> Vec<Command> {
        self.receiver.try_iter().collect()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
