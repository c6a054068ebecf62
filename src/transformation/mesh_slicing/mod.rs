pub use self::boundary_reconstruction::BoundaryReconstructor;
pub use self::cap_triangulation::triangulate_cap;
pub use self::mesh_slicer::MeshSlicer;
pub use self::mesh_slicing_error::SliceError;
pub use self::slice_tolerances::SliceTolerances;
pub use self::vertex_partition::{partition_vertices, PartitionCounts};

mod boundary_reconstruction;
mod cap_triangulation;
mod mesh_slicer;
mod mesh_slicing_error;
mod slice_tolerances;
mod vertex_partition;
