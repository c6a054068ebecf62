/*!
cleave3d
========

**cleave3d** slices closed triangle meshes by a plane, producing two
independently closed solids: the part lying on the positive side of the plane
and the part lying on its negative side. The cross-section left by the cut is
reconstructed from the intersection segments and capped on both sides.

```
# #[cfg(feature = "f32")] {
use cleave3d::math::{Point, Vector};
use cleave3d::shape::{Plane, TriMesh};
use cleave3d::transformation::MeshSlicer;

let vertices = vec![
    Point::new(0.0, -1.0, 0.0),
    Point::new(1.0, 1.0, 0.0),
    Point::new(-1.0, 1.0, 1.0),
    Point::new(-1.0, 1.0, -1.0),
];
let indices = vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];
let mesh = TriMesh::from_positions(vertices, indices).unwrap();

let mut slicer = MeshSlicer::new();
assert_eq!(slicer.slice(&mesh, &Plane::new(Vector::y_axis(), 0.0)), Ok(true));
assert!(!slicer.positive().is_empty());
assert!(!slicer.negative().is_empty());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;
}
