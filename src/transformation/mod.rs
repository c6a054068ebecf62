//! Transformation of meshes: plane slicing and Wavefront export.

pub use self::mesh_slicing::{
    partition_vertices, triangulate_cap, BoundaryReconstructor, MeshSlicer, PartitionCounts,
    SliceError, SliceTolerances,
};

mod mesh_slicing;

#[cfg(feature = "wavefront")]
pub mod wavefront;
