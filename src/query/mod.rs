//! Non-persistent geometric queries against a cutting plane.
//!
//! * [`split_triangle`] clips a single triangle by a plane.
//! * [`TriMesh::split_by_plane`](crate::shape::TriMesh::split_by_plane) splits a
//!   whole closed mesh into two capped solids.

pub use self::split::{split_triangle, SplitResult};

mod split;
