//! Easing curves for property transitions.

/// Shapes the progress of a [`Transition`](crate::transition::Transition)
/// over its normalized lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic, slow start.
    QuadIn,
    /// Quadratic, slow end.
    QuadOut,
    /// Quadratic, slow start and end.
    QuadInOut,
    /// Cubic, slow start.
    CubicIn,
    /// Cubic, slow end. The default for layout motion.
    #[default]
    CubicOut,
    /// Cubic, slow start and end.
    CubicInOut,
}

impl Easing {
    /// Map a normalized time `t` in `[0, 1]` to eased progress.
    ///
    /// Inputs outside the unit interval are clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}
