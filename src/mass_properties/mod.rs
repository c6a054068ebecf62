//! Volume computations on closed triangle meshes.

pub use self::mass_properties_trimesh3d::{
    tetrahedron_signed_volume, trimesh_signed_area_vector, trimesh_signed_volume,
};

mod mass_properties_trimesh3d;
