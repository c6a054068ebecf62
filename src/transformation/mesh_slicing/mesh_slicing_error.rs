#[cfg(doc)]
use crate::transformation::MeshSlicer;

/// Errors that can occur when slicing a triangle mesh with [`MeshSlicer::slice`].
///
/// A plane that simply misses the mesh is not an error: `slice` returns
/// `Ok(false)` in that case. Whenever an error is returned, both output buffers
/// of the slicer have been cleared.
///
/// These errors typically indicate that the input mesh is not a closed,
/// consistently wound, manifold surface, or that the welding tolerance is too
/// small for the precision of the input coordinates. Retrying with a slightly
/// perturbed plane or with larger [`SliceTolerances`](crate::transformation::SliceTolerances)
/// is up to the caller.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SliceError {
    /// The plane crosses some triangles, but one side of the cut did not receive
    /// any geometry.
    ///
    /// This cannot happen for well-formed inputs and indicates an internal
    /// inconsistency of the slicing bookkeeping.
    #[error("intersection segments were found but one side of the cut received no triangle")]
    InconsistentSplit,

    /// The intersection segments could not be chained into closed loops.
    ///
    /// The cross-section of a closed mesh is always made of closed loops. An open
    /// chain means the mesh has holes, is non-manifold, or has inconsistent winding.
    #[error("the cross-section boundary is open: {remaining} intersection segments could not be chained into a loop")]
    OpenBoundary {
        /// The number of segments left unchained when the traversal stopped.
        remaining: usize,
    },

    /// Every cross-section loop collapsed to less than three corners, so no cap could
    /// be built although the plane crosses the mesh.
    #[error("the cross-section is degenerate and cannot be capped")]
    DegenerateCrossSection,
}
