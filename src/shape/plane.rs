//! Definition of the cutting plane.

use crate::math::{Point, Real, UnitVector};

/// The side of a [`Plane`] a point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PlaneSide {
    /// The half-space the plane normal points to, including the plane itself.
    Positive,
    /// The opposite, open, half-space.
    Negative,
}

/// An infinite plane splitting space into two half-spaces.
///
/// The plane is the set of points `p` satisfying `normal · p = bias`, i.e., it
/// passes through the point `normal * bias`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal, pointing toward its positive half-space.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds a plane from its normal and its signed offset from the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Self {
        Plane { normal, bias }
    }

    /// Builds the plane passing through `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Self {
        let bias = normal.dot(&point.coords);
        Plane { normal, bias }
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// Positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// Classifies `pt` against this plane.
    ///
    /// Points exactly on the plane belong to the positive side.
    #[inline]
    pub fn side(&self, pt: &Point<Real>) -> PlaneSide {
        Self::side_of_distance(self.signed_distance(pt))
    }

    /// The side corresponding to a signed distance computed by [`Self::signed_distance`].
    #[inline]
    pub fn side_of_distance(dist: Real) -> PlaneSide {
        if dist >= 0.0 {
            PlaneSide::Positive
        } else {
            PlaneSide::Negative
        }
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }
}
