use super::{
    partition_vertices, triangulate_cap, BoundaryReconstructor, SliceError, SliceTolerances,
};
use crate::math::{Point, Real};
use crate::query::split_triangle;
use crate::shape::{MeshBuffer, Plane, Segment, TriMesh};
use core::mem;
use core::ops::Range;

/// Slices closed triangle meshes by a plane into two capped solids.
///
/// A slicer owns the two output buffers and every scratch buffer used during a
/// slice, so reusing one slicer for many cuts avoids most allocations. A slicer
/// is mutated by each call: slicing in parallel requires one slicer per thread.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use cleave3d::math::{Point, Vector};
/// use cleave3d::shape::{Plane, TriMesh};
/// use cleave3d::transformation::MeshSlicer;
///
/// // An axis-aligned tetrahedron.
/// let vertices = vec![
///     Point::origin(),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
/// let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
/// let mesh = TriMesh::from_positions(vertices, indices).unwrap();
///
/// let mut slicer = MeshSlicer::new();
/// let plane = Plane::new(Vector::x_axis(), 0.5);
///
/// if slicer.slice(&mesh, &plane) == Ok(true) {
///     let total = slicer.positive().signed_volume() + slicer.negative().signed_volume();
///     assert!((total - 1.0 / 6.0).abs() < 1.0e-5);
///     assert_eq!(slicer.num_cross_sections(), 1);
/// }
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct MeshSlicer {
    tolerances: SliceTolerances,
    positive: MeshBuffer,
    negative: MeshBuffer,
    segments: Vec<Segment>,
    boundary: BoundaryReconstructor,
    polygon_points: Vec<Point<Real>>,
    polygon_ranges: Vec<Range<usize>>,
}

impl MeshSlicer {
    /// Creates a slicer with the default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slicer with custom tolerances.
    pub fn with_tolerances(tolerances: SliceTolerances) -> Self {
        Self {
            tolerances,
            ..Self::default()
        }
    }

    /// The tolerances used by this slicer.
    pub fn tolerances(&self) -> &SliceTolerances {
        &self.tolerances
    }

    /// Changes the tolerances used by the next slices.
    pub fn set_tolerances(&mut self, tolerances: SliceTolerances) {
        self.tolerances = tolerances;
    }

    /// The part of the last sliced mesh lying on the positive side of the plane.
    ///
    /// Empty if the last call to [`Self::slice`] did not return `Ok(true)`.
    pub fn positive(&self) -> &MeshBuffer {
        &self.positive
    }

    /// The part of the last sliced mesh lying on the negative side of the plane.
    ///
    /// Empty if the last call to [`Self::slice`] did not return `Ok(true)`.
    pub fn negative(&self) -> &MeshBuffer {
        &self.negative
    }

    /// Moves the result of the last slice out of this slicer, as `(negative, positive)`.
    pub fn take_meshes(&mut self) -> (MeshBuffer, MeshBuffer) {
        (
            mem::take(&mut self.negative),
            mem::take(&mut self.positive),
        )
    }

    /// The number of capped cross-section polygons of the last slice.
    pub fn num_cross_sections(&self) -> usize {
        self.polygon_ranges.len()
    }

    /// The corners of every capped cross-section polygon of the last slice.
    ///
    /// Each polygon is counter-clockwise around the plane normal.
    pub fn cross_sections(&self) -> impl ExactSizeIterator<Item = &[Point<Real>]> + '_ {
        self.polygon_ranges
            .iter()
            .map(|range| &self.polygon_points[range.clone()])
    }

    /// Clears both output buffers and every scratch buffer.
    pub fn clear(&mut self) {
        self.positive.clear();
        self.negative.clear();
        self.segments.clear();
        self.boundary.clear();
        self.polygon_points.clear();
        self.polygon_ranges.clear();
    }

    /// Slices `mesh` by `plane`.
    ///
    /// On success, [`Self::positive`] and [`Self::negative`] contain the two closed
    /// halves of the mesh, including the original vertices of each side and the caps
    /// closing the cut.
    ///
    /// # Result
    /// - `Ok(true)` if the mesh was split.
    /// - `Ok(false)` if the plane does not separate the mesh: it misses its bounding box,
    ///   no vertex lies strictly on one of its sides, or the plane only grazes the mesh.
    /// - `Err(_)` if the cross-section could not be reconstructed.
    ///
    /// Both output buffers are left empty whenever `Ok(true)` is not returned.
    pub fn slice(&mut self, mesh: &TriMesh, plane: &Plane) -> Result<bool, SliceError> {
        self.clear();

        if !mesh.aabb().intersects_plane(plane) {
            log::debug!("Slice skipped: the plane does not cross the mesh bounding box.");
            return Ok(false);
        }

        let counts = partition_vertices(
            mesh.vertices(),
            mesh.normals(),
            plane,
            &mut self.positive,
            &mut self.negative,
        );

        // Vertices lying on the plane go to the positive buffer, but only those
        // strictly above it give the positive side a volume.
        if counts.above == 0 || counts.negative == 0 {
            log::debug!(
                "Slice skipped: no vertex lies strictly on the {} side of the plane.",
                if counts.negative == 0 { "negative" } else { "positive" }
            );
            self.clear();
            return Ok(false);
        }

        for idx in mesh.indices() {
            if let Some(segment) = split_triangle(
                mesh.vertices(),
                mesh.normals(),
                *idx,
                plane,
                &mut self.positive,
                &mut self.negative,
            ) {
                self.segments.push(segment);
            }
        }

        match self.close_cross_sections(plane) {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.clear();
                Ok(false)
            }
            Err(err) => {
                log::debug!("Slice failed: {err}");
                self.clear();
                Err(err)
            }
        }
    }

    fn close_cross_sections(&mut self, plane: &Plane) -> Result<bool, SliceError> {
        let num_edges = self
            .boundary
            .weld_segments(&self.segments, self.tolerances.weld_distance);

        if num_edges == 0 {
            log::debug!(
                "Slice skipped: the plane only grazes the mesh ({} degenerate segments).",
                self.segments.len()
            );
            return Ok(false);
        }

        if self.positive.num_triangles() == 0 || self.negative.num_triangles() == 0 {
            return Err(SliceError::InconsistentSplit);
        }

        let num_loops = self.boundary.chain()?;
        let mut num_cap_triangles = 0;

        for i in 0..num_loops {
            let start = self.polygon_points.len();
            self.boundary.find_real_polygon(
                i,
                self.tolerances.collinearity_angle,
                &mut self.polygon_points,
            );

            let corners = &self.polygon_points[start..];
            let num_triangles =
                triangulate_cap(corners, &plane.normal, &mut self.positive, &mut self.negative);

            if num_triangles == 0 {
                log::debug!(
                    "Skipping a degenerate cross-section loop with {} corners.",
                    corners.len()
                );
                self.polygon_points.truncate(start);
                continue;
            }

            num_cap_triangles += num_triangles;
            self.polygon_ranges.push(start..self.polygon_points.len());
        }

        if num_cap_triangles == 0 {
            return Err(SliceError::DegenerateCrossSection);
        }

        log::trace!(
            "Sliced mesh: {} segments, {} loops, {} cap triangles per side.",
            num_edges,
            num_loops,
            num_cap_triangles
        );

        Ok(true)
    }
}
