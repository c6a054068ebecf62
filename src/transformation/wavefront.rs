//! Wavefront (`.obj`) export of meshes.
//!
//! This module is enabled by the `wavefront` feature flag.

use crate::math::{Point, Real, Vector};
use crate::shape::{MeshBuffer, TriMesh};
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::PathBuf;

impl TriMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    pub fn to_obj_file(&self, path: &PathBuf) -> Result<(), ObjError> {
        write_obj_file(path, self.vertices(), self.normals(), self.indices())
    }
}

impl MeshBuffer {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Vertex normals are exported along with the positions.
    pub fn to_obj_file(&self, path: &PathBuf) -> Result<(), ObjError> {
        write_obj_file(path, self.vertices(), self.normals(), self.indices())
    }
}

fn write_obj_file(
    path: &PathBuf,
    vertices: &[Point<Real>],
    normals: &[Vector<Real>],
    indices: &[[u32; 3]],
) -> Result<(), ObjError> {
    let mut file = std::fs::File::create(path).map_err(ObjError::Io)?;

    #[allow(clippy::unnecessary_cast)]
    let data = ObjData {
        position: vertices
            .iter()
            .map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect(),
        normal: normals
            .iter()
            .map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect(),
        objects: vec![Object {
            groups: vec![Group {
                polys: indices
                    .iter()
                    .map(|tri| {
                        SimplePolygon(
                            tri.iter()
                                .map(|i| IndexTuple(*i as usize, None, Some(*i as usize)))
                                .collect(),
                        )
                    })
                    .collect(),
                name: String::new(),
                index: 0,
                material: None,
            }],
            name: String::new(),
        }],
        ..Default::default()
    };

    data.write_to_buf(&mut file)
}
