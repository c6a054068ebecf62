//! Shapes manipulated by the slicer: the cutting plane, the source mesh and
//! the growable output buffers.

pub use self::mesh_buffer::MeshBuffer;
pub use self::plane::{Plane, PlaneSide};
pub use self::segment::Segment;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod mesh_buffer;
mod plane;
mod segment;
mod trimesh;
