use super::SliceError;
use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::hashmap::HashMap;
use crate::utils::hashset::HashSet;
use crate::utils::PointWelder;
use core::ops::Range;
use smallvec::SmallVec;

/// Rebuilds the closed boundary loops of a planar cross-section from the
/// unordered segments produced by cutting each triangle of a mesh.
///
/// The reconstruction runs in three steps:
/// 1. [`BoundaryReconstructor::weld_segments`] identifies nearly-coincident
///    endpoints and drops zero-length and duplicate segments.
/// 2. [`BoundaryReconstructor::chain`] orders the remaining segments head-to-tail
///    into closed loops.
/// 3. [`BoundaryReconstructor::find_real_polygon`] extracts the corners of each loop,
///    merging away the points interior to straight runs.
///
/// All the buffers are kept between calls to avoid reallocations.
#[derive(Clone, Debug, Default)]
pub struct BoundaryReconstructor {
    welder: PointWelder,
    // Welded segments, as pairs of point identifiers, in input order.
    edges: Vec<[u32; 2]>,
    seen: HashSet<[u32; 2]>,
    // Edges starting at a given point, in input order.
    outgoing: HashMap<u32, SmallVec<[u32; 2]>>,
    used: Vec<bool>,
    // Edge indices, in traversal order.
    chained: Vec<u32>,
    loops: Vec<Range<usize>>,
}

impl BoundaryReconstructor {
    /// Creates an empty reconstructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the welding and chaining steps.
    ///
    /// Returns the number of closed loops found. `Ok(0)` is only returned when no
    /// segment survives welding, i.e., when every segment is degenerate or the
    /// input is empty: any remaining segment either closes a loop or fails with
    /// [`SliceError::OpenBoundary`].
    pub fn reconstruct(
        &mut self,
        segments: &[Segment],
        weld_distance: Real,
    ) -> Result<usize, SliceError> {
        if self.weld_segments(segments, weld_distance) == 0 {
            return Ok(0);
        }

        self.chain()
    }

    /// Removes every segment, loop and welded point.
    pub fn clear(&mut self) {
        self.welder.clear();
        self.edges.clear();
        self.seen.clear();
        self.outgoing.clear();
        self.used.clear();
        self.chained.clear();
        self.loops.clear();
    }

    /// Welds the segment endpoints and filters degenerate and duplicate segments.
    ///
    /// Two endpoints closer than `weld_distance` are considered equal. A segment is
    /// dropped if both its endpoints are equal, or if an identical segment (with the
    /// same orientation) appeared before it.
    ///
    /// Returns the number of segments kept.
    pub fn weld_segments(&mut self, segments: &[Segment], weld_distance: Real) -> usize {
        self.clear();
        self.welder.reset(weld_distance);

        for seg in segments {
            let edge = [self.welder.insert(seg.a), self.welder.insert(seg.b)];

            if edge[0] != edge[1] && self.seen.insert(edge) {
                self.edges.push(edge);
            }
        }

        self.edges.len()
    }

    /// Chains the welded segments into closed loops.
    ///
    /// Loops are started from the first unused segment, in input order. Each loop is
    /// then extended with the first unused segment starting where the previous one
    /// ends, until it comes back to its starting point.
    ///
    /// Returns the number of loops, or [`SliceError::OpenBoundary`] if a chain cannot
    /// be closed.
    pub fn chain(&mut self) -> Result<usize, SliceError> {
        self.outgoing.clear();
        self.used.clear();
        self.used.resize(self.edges.len(), false);
        self.chained.clear();
        self.loops.clear();

        for (i, edge) in self.edges.iter().enumerate() {
            self.outgoing.entry(edge[0]).or_default().push(i as u32);
        }

        let mut cursor = 0;

        loop {
            while cursor < self.edges.len() && self.used[cursor] {
                cursor += 1;
            }

            if cursor == self.edges.len() {
                break;
            }

            let loop_start = self.chained.len();
            let origin = self.edges[cursor][0];
            let mut end = self.edges[cursor][1];
            self.used[cursor] = true;
            self.chained.push(cursor as u32);

            while end != origin {
                let next = self.outgoing.get(&end).and_then(|candidates| {
                    candidates
                        .iter()
                        .copied()
                        .find(|id| !self.used[*id as usize])
                });

                let Some(next) = next else {
                    let remaining = self.edges.len() - self.chained.len();
                    log::debug!(
                        "Open cross-section boundary: no segment continues the chain at {:?}.",
                        self.welder.point(end)
                    );
                    return Err(SliceError::OpenBoundary { remaining });
                };

                self.used[next as usize] = true;
                self.chained.push(next);
                end = self.edges[next as usize][1];
            }

            self.loops.push(loop_start..self.chained.len());
        }

        Ok(self.loops.len())
    }

    /// The segments of the `i`-th loop, in traversal order.
    pub fn loop_segments(&self, i: usize) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.chained[self.loops[i].clone()].iter().map(|id| {
            let [a, b] = self.edges[*id as usize];
            Segment::new(self.welder.point(a), self.welder.point(b))
        })
    }

    /// Appends to `out` the corners of the `i`-th loop.
    ///
    /// The shared endpoint of two consecutive segments is a corner if the angle between
    /// their directions exceeds `collinearity_angle`. Corners are output in traversal
    /// order; the polygon they form is implicitly closed.
    pub fn find_real_polygon(
        &self,
        i: usize,
        collinearity_angle: Real,
        out: &mut Vec<Point<Real>>,
    ) {
        let edges = &self.chained[self.loops[i].clone()];

        for (k, curr) in edges.iter().enumerate() {
            let next = edges[(k + 1) % edges.len()];
            let [a, b] = self.edges[*curr as usize];
            let [_, c] = self.edges[next as usize];

            let pa = self.welder.point(a);
            let pb = self.welder.point(b);
            let pc = self.welder.point(c);
            let dir1 = pb - pa;
            let dir2 = pc - pb;
            let angle = dir1.cross(&dir2).norm().atan2(dir1.dot(&dir2));

            if angle > collinearity_angle {
                out.push(pb);
            }
        }
    }
}
