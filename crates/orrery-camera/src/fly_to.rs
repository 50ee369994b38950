//! A single camera fly-to gesture: fixed anchors, fixed duration, eased
//! interpolation sampled from wall-clock time.

use crate::camera::CameraPose;
use crate::easing::Easing;

/// Default fly-to duration in milliseconds.
pub const DEFAULT_FLY_TO_MS: f64 = 1000.0;

/// An in-flight camera animation.
///
/// The pose is recomputed from the fixed start/end anchors on every sample,
/// never accumulated incrementally, so the final pose is exactly the end
/// anchors with no floating-point drift.
#[derive(Clone, Debug)]
pub struct FlyTo {
    from: CameraPose,
    to: CameraPose,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl FlyTo {
    /// Create an animation from `from` to `to` starting at `start_ms`.
    /// A zero duration is clamped to 1 ms to keep progress well-defined.
    pub fn new(from: CameraPose, to: CameraPose, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing: Easing::default(),
        }
    }

    /// The destination pose.
    pub fn end_pose(&self) -> CameraPose {
        self.to
    }

    /// Sample the pose at `now_ms`. Returns the pose and whether the
    /// animation has completed (progress reached 1).
    pub fn sample(&self, now_ms: f64) -> (CameraPose, bool) {
        let progress = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            // Snap to the anchors so no interpolation rounding survives.
            return (self.to, true);
        }
        let eased = self.easing.apply(progress);
        let pose = CameraPose {
            position: self.from.position.lerp(self.to.position, eased),
            target: self.from.target.lerp(self.to.target, eased),
        };
        (pose, false)
    }
}
