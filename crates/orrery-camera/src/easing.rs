//! Easing curves for camera fly-to interpolation.

/// Maps linear animation progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end (quadratic).
    EaseOut,
    /// Fast start, gentle settle (cubic). The fly-to default: the camera
    /// decelerates into the target instead of stopping abruptly.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Map a linear progress value in `[0, 1]` to an eased value.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}
