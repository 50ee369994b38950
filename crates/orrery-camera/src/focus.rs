//! Focus controller: turns a body selection into a camera fly-to.

use glam::DVec3;

use orrery_catalog::BodyRecord;
use orrery_sim::World;

use crate::camera::CameraPose;
use crate::fly_to::{DEFAULT_FLY_TO_MS, FlyTo};

/// Fly-to distance as a multiple of the body's display size.
pub const FOCUS_DISTANCE_FACTOR: f64 = 15.0;

/// Camera height above the body as a fraction of the fly-to distance.
pub const FOCUS_HEIGHT_FACTOR: f64 = 0.5;

/// Focus request failures. Both are expected and handled locally by the
/// caller; neither is fatal.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FocusError {
    /// The requested id matches no body in the world.
    #[error("unknown body id {0:?}")]
    UnknownBody(String),
}

/// Drives the camera toward a selected body.
///
/// Holds at most one in-flight [`FlyTo`]; a new focus request overwrites any
/// in-flight animation unconditionally. Last request wins, with no blending
/// between two fly-tos.
#[derive(Debug, Default)]
pub struct FocusController {
    animation: Option<FlyTo>,
    duration_ms: Option<f64>,
}

impl FocusController {
    /// Controller with the default 1 s fly-to duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with a custom fly-to duration in milliseconds.
    pub fn with_duration_ms(duration_ms: f64) -> Self {
        Self {
            animation: None,
            duration_ms: Some(duration_ms),
        }
    }

    /// Start a fly-to from `current` toward the body `body_id`.
    ///
    /// The destination looks at the body's position at this instant, from
    /// `display_size * 15` away, approaching from the direction given by
    /// `pick_angle` (radians around the +y axis) and elevated by half the
    /// distance. Returns the body's record so the caller can feed the info
    /// panel; an unknown id leaves any in-flight animation untouched.
    pub fn focus<'w>(
        &mut self,
        world: &'w World,
        body_id: &str,
        current: CameraPose,
        pick_angle: f64,
        now_ms: f64,
    ) -> Result<&'w BodyRecord, FocusError> {
        let body = world
            .body(body_id)
            .ok_or_else(|| FocusError::UnknownBody(body_id.to_string()))?;

        let target = body.position();
        let distance = body.record.display_size * FOCUS_DISTANCE_FACTOR;
        let end_position = target
            + DVec3::new(
                pick_angle.cos() * distance,
                FOCUS_HEIGHT_FACTOR * distance,
                pick_angle.sin() * distance,
            );

        let duration = self.duration_ms.unwrap_or(DEFAULT_FLY_TO_MS);
        self.animation = Some(FlyTo::new(
            current,
            CameraPose::new(end_position, target),
            now_ms,
            duration,
        ));

        Ok(&body.record)
    }

    /// Advance the in-flight animation and write the sampled pose. A no-op
    /// when nothing is animating; deactivates itself once the end pose has
    /// been written.
    pub fn advance(&mut self, now_ms: f64, pose: &mut CameraPose) {
        if let Some(animation) = &self.animation {
            let (sampled, done) = animation.sample(now_ms);
            *pose = sampled;
            if done {
                self.animation = None;
            }
        }
    }

    /// Whether a fly-to currently owns the camera.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}
