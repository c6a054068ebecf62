use crate::bounding_volume::Aabb;
use crate::mass_properties::trimesh_signed_volume;
use crate::math::{Point, Real, Vector};

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// The normal buffer is not index-aligned with the vertex buffer.
    #[error("the mesh has {vertices} vertices but {normals} normals.")]
    NormalCountMismatch {
        /// The number of vertices.
        vertices: usize,
        /// The number of normals.
        normals: usize,
    },
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which is out of bounds.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

/// A triangle mesh with per-vertex normals.
///
/// This is the read-only input of the slicer. Triangles are expected to be
/// wound consistently, counter-clockwise when seen from outside the solid,
/// and to describe a closed surface. Meshes violating these assumptions can
/// still be sliced, but the resulting caps are unspecified.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer, an index-aligned normal
    /// buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        if vertices.len() != normals.len() {
            return Err(TriMeshBuilderError::NormalCountMismatch {
                vertices: vertices.len(),
                normals: normals.len(),
            });
        }

        for (i, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|id| **id as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: i as u32,
                    index: *bad,
                });
            }
        }

        Ok(Self {
            vertices,
            normals,
            indices,
        })
    }

    /// Creates a new triangle mesh, computing its vertex normals.
    ///
    /// Each vertex normal is the normalized sum of the (area-weighted) normals of
    /// the triangles sharing that vertex.
    pub fn from_positions(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        let mut normals = vec![Vector::zeros(); vertices.len()];

        for idx in &indices {
            let [a, b, c] = idx.map(|i| vertices.get(i as usize));
            if let (Some(a), Some(b), Some(c)) = (a, b, c) {
                let n = (b - a).cross(&(c - a));
                for i in idx {
                    normals[*i as usize] += n;
                }
            }
        }

        for n in &mut normals {
            *n = n
                .try_normalize(crate::math::DEFAULT_EPSILON)
                .unwrap_or_else(Vector::zeros);
        }

        Self::new(vertices, normals, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The normal buffer of this mesh, index-aligned with [`Self::vertices`].
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles forming this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The three corners of the `i`-th triangle.
    pub fn triangle(&self, i: u32) -> [Point<Real>; 3] {
        self.indices[i as usize].map(|id| self.vertices[id as usize])
    }

    /// The axis-aligned bounding box of this mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// Only meaningful if the mesh is closed. Positive for outward-facing triangles.
    pub fn signed_volume(&self) -> Real {
        trimesh_signed_volume(&self.vertices, &self.indices)
    }
}
