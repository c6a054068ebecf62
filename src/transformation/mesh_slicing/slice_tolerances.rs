use crate::math::Real;

/// Tolerances used while reconstructing the cross-section of a sliced mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceTolerances {
    /// Intersection points closer than this distance are considered equal.
    ///
    /// This single tolerance drives the removal of zero-length and duplicate
    /// segments, their chaining, and the detection of closed loops.
    pub weld_distance: Real,
    /// Angle, in radians, below which two consecutive boundary edges are
    /// considered collinear and their shared point merged away.
    pub collinearity_angle: Real,
}

impl Default for SliceTolerances {
    #[cfg(feature = "f64")]
    fn default() -> Self {
        Self {
            weld_distance: 1.0e-9,
            collinearity_angle: 1.0e-6,
        }
    }

    #[cfg(feature = "f32")]
    fn default() -> Self {
        Self {
            weld_distance: 1.0e-5,
            collinearity_angle: 1.0e-4,
        }
    }
}
