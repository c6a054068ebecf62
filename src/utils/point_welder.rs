//! Grid-based spatial hash merging nearly-coincident points.
//!
//! Space is divided into cubic cells twice as large as the welding tolerance,
//! so two points closer than the tolerance always lie in the same cell or in
//! adjacent ones. Looking a point up only inspects the 3x3x3 block of cells
//! around it.

use crate::math::{Point, Real};
use crate::utils::hashmap::HashMap;
use smallvec::SmallVec;

/// Assigns the same integer identifier to points lying within a given distance
/// of each other.
///
/// Identifiers are attributed in insertion order. The first point inserted
/// with a given identifier is kept as its representative.
#[derive(Clone, Debug)]
pub struct PointWelder {
    cells: HashMap<[i64; 3], SmallVec<[u32; 2]>>,
    points: Vec<Point<Real>>,
    cell_size: Real,
    tolerance: Real,
}

impl Default for PointWelder {
    fn default() -> Self {
        Self::new(crate::math::DEFAULT_EPSILON)
    }
}

impl PointWelder {
    /// Creates an empty welder merging points closer than `tolerance`.
    pub fn new(tolerance: Real) -> Self {
        let tolerance = tolerance.max(Real::MIN_POSITIVE);
        Self {
            cells: HashMap::default(),
            points: vec![],
            cell_size: tolerance * 2.0,
            tolerance,
        }
    }

    /// Removes every point and changes the welding distance.
    pub fn reset(&mut self, tolerance: Real) {
        let tolerance = tolerance.max(Real::MIN_POSITIVE);
        self.tolerance = tolerance;
        self.cell_size = tolerance * 2.0;
        self.clear();
    }

    /// Removes every point, keeping the allocations.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.points.clear();
    }

    /// The number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no point was inserted since the last clear.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The representative of the point with identifier `id`.
    #[inline]
    pub fn point(&self, id: u32) -> Point<Real> {
        self.points[id as usize]
    }

    #[inline]
    fn cell_coords(&self, pt: &Point<Real>) -> [i64; 3] {
        // NOTE: `as` saturates, so huge coordinates only end up in the same far-away cell.
        let discretize = |v: Real| (v / self.cell_size).floor() as i64;
        [discretize(pt.x), discretize(pt.y), discretize(pt.z)]
    }

    /// Finds the identifier of an already inserted point within the tolerance of `pt`.
    ///
    /// If several match, the smallest identifier is returned.
    pub fn find(&self, pt: &Point<Real>) -> Option<u32> {
        let [cx, cy, cz] = self.cell_coords(pt);
        let mut best: Option<u32> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = [
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    ];
                    let Some(ids) = self.cells.get(&key) else {
                        continue;
                    };

                    for id in ids {
                        if best.is_some_and(|best| best <= *id) {
                            continue;
                        }

                        if na::distance(&self.points[*id as usize], pt) <= self.tolerance {
                            best = Some(*id);
                        }
                    }
                }
            }
        }

        best
    }

    /// Inserts `pt`, or returns the identifier of an existing point within tolerance.
    pub fn insert(&mut self, pt: Point<Real>) -> u32 {
        if let Some(id) = self.find(&pt) {
            return id;
        }

        let id = self.points.len() as u32;
        let key = self.cell_coords(&pt);
        self.cells.entry(key).or_default().push(id);
        self.points.push(pt);
        id
    }
}
