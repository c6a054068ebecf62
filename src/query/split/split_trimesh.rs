use crate::query::SplitResult;
use crate::shape::{MeshBuffer, Plane, TriMesh};
use crate::transformation::{MeshSlicer, SliceError, SliceTolerances};

impl TriMesh {
    /// Splits this closed mesh by a plane, capping the cross-section on both sides.
    ///
    /// This allocates a new [`MeshSlicer`]. Prefer reusing a slicer when cutting
    /// many meshes.
    ///
    /// # Result
    /// Returns `SplitResult::Pair(negative, positive)` if the plane crosses the mesh,
    /// where `negative` lies on the negative half-space delimited by the plane and
    /// `positive` on its positive half-space. Otherwise, the half-space containing the
    /// whole mesh is returned.
    pub fn split_by_plane(&self, plane: &Plane) -> Result<SplitResult<MeshBuffer>, SliceError> {
        self.split_by_plane_with_tolerances(plane, SliceTolerances::default())
    }

    /// Splits this closed mesh by a plane, with custom tolerances.
    ///
    /// See [`TriMesh::split_by_plane`] for details.
    pub fn split_by_plane_with_tolerances(
        &self,
        plane: &Plane,
        tolerances: SliceTolerances,
    ) -> Result<SplitResult<MeshBuffer>, SliceError> {
        let mut slicer = MeshSlicer::with_tolerances(tolerances);

        if slicer.slice(self, plane)? {
            let (negative, positive) = slicer.take_meshes();
            Ok(SplitResult::Pair(negative, positive))
        } else if self
            .vertices()
            .iter()
            .any(|pt| plane.signed_distance(pt) > 0.0)
        {
            Ok(SplitResult::Positive)
        } else {
            Ok(SplitResult::Negative)
        }
    }
}
