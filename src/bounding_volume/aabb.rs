//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, UnitVector, Vector, DIM};
use crate::shape::Plane;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// It is used by the slicer as a cheap conservative test: a mesh whose box
/// does not straddle the cutting plane cannot be split by it.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`,
///   except for the box returned by [`Aabb::new_invalid`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. Taking any point into it yields a valid box.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use cleave3d::bounding_volume::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let points = vec![
    ///     Point3::new(1.0, 2.0, 3.0),
    ///     Point3::new(-1.0, 4.0, 2.0),
    ///     Point3::new(0.0, 0.0, 5.0),
    /// ];
    ///
    /// let aabb = Aabb::from_points_ref(&points);
    /// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
    /// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
    /// # }
    /// ```
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts.into_iter().copied())
    }

    /// Creates a new AABB that tightly encloses a set of points (values).
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Returns `false` if this box was built from [`Aabb::new_invalid`] and
    /// never took any point.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Projects every point of `Aabb` on an arbitrary axis.
    ///
    /// Returns the `(min, max)` interval covered by the projection.
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let shift = self.half_extents().dot(&axis.abs());
        let center = self.center().coords.dot(axis);
        (center - shift, center + shift)
    }

    /// Tests whether the plane passes strictly through the interior of this box.
    ///
    /// A plane merely touching one face, edge or corner of the box does not
    /// count as an intersection.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use cleave3d::bounding_volume::Aabb;
    /// use cleave3d::shape::Plane;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    /// assert!(aabb.intersects_plane(&Plane::new(Vector3::y_axis(), 0.5)));
    /// assert!(!aabb.intersects_plane(&Plane::new(Vector3::y_axis(), 1.0)));
    /// assert!(!aabb.intersects_plane(&Plane::new(Vector3::y_axis(), 10.0)));
    /// # }
    /// ```
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        if !self.is_valid() {
            return false;
        }

        let (min, max) = self.project_on_axis(&plane.normal);
        min < plane.bias && plane.bias < max
    }
}
