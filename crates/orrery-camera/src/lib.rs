//! Camera state and the fly-to focus animation.
//!
//! The camera is a position plus a look-at target. Selecting a body starts a
//! fixed-duration eased interpolation from the current pose to a pose near
//! the body; the controller exposes an animating flag so the host loop knows
//! when the animation owns the camera instead of free orbit controls.

mod camera;
mod easing;
mod fly_to;
mod focus;

pub use camera::{Camera, CameraPose};
pub use easing::Easing;
pub use fly_to::{DEFAULT_FLY_TO_MS, FlyTo};
pub use focus::{FOCUS_DISTANCE_FACTOR, FOCUS_HEIGHT_FACTOR, FocusController, FocusError};
