//! Input marshalling: a command queue drained once per tick by the single
//! update thread, plus pointer-pick resolution against body hit volumes.
//!
//! Hosts may dispatch UI events (clicks, slider changes, resizes) from any
//! thread; sending them as [`Command`]s through the queue preserves the
//! single-writer invariant over the world and camera state.

mod command;
mod pick;

pub use command::{Command, CommandQueue, CommandSender};
pub use pick::{pick_body, window_to_ndc};
