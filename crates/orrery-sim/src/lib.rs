//! Orbital kinematics: per-frame integration of body orbital and spin angles.
//!
//! Positions are always derived from angles, never integrated separately, so
//! angle and position can never drift apart. Rates are authored for a 60 Hz
//! frame step and rescaled by the actual frame delta, making motion
//! independent of the host frame rate.

mod body;
mod world;

pub use body::BodyState;
pub use world::{REFERENCE_FRAME_RATE, World};
