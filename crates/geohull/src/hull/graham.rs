//! Monotone-chain hull over a partitioned point set, and the pruning pass.
//!
//! Model
//! - `partition` yields the two extremes and the candidates above/below the
//!   chord between them.
//! - Each half is scanned left to right; a point is pushed, then the tail is
//!   backtracked until the last three points turn the right way for that half.
//! - If neither scan discarded anything, the input already is its own hull.
//!   Otherwise the lower chain and the reversed upper chain are stitched into a
//!   closed boundary (left → lower → right → upper) and swapped into the caller's
//!   `Vec`.

use super::orient::{direction, Tolerance};
use super::partition::{partition, Extremes};
use crate::point::Located;

/// Lower half: keep the middle point only if it lies below its neighbours.
const LOWER: i32 = 1;
/// Upper half: keep the middle point only if it lies above its neighbours.
const UPPER: i32 = -1;

/// Reusable hull pass. Owns its working buffers; the caller's points are only
/// borrowed for the duration of `prune_interior`.
#[derive(Clone, Debug)]
pub struct GrahamScan<T> {
    tolerance: Tolerance,
    upper_partition: Vec<T>,
    lower_partition: Vec<T>,
    upper_hull: Vec<T>,
    lower_hull: Vec<T>,
}

impl<T: Located + Clone> GrahamScan<T> {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            upper_partition: Vec::new(),
            lower_partition: Vec::new(),
            upper_hull: Vec::new(),
            lower_hull: Vec::new(),
        }
    }

    /// Dead zone applied to every orientation test of this scan.
    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Remove every item of `points` that is not a vertex of their convex hull.
    ///
    /// Returns `false` (and leaves `points` untouched) when there are fewer
    /// than three items or when the scan discarded nothing. On `true`, `points`
    /// holds the hull boundary starting at the lexicographically smallest
    /// location and running through the lower chain first.
    pub fn prune_interior(&mut self, points: &mut Vec<T>) -> bool {
        let size = points.len();
        if size < 3 {
            return false;
        }

        self.upper_partition.clear();
        self.lower_partition.clear();
        self.upper_hull.clear();
        self.lower_hull.clear();

        let extremes = partition(
            points.as_slice(),
            self.tolerance,
            &mut self.upper_partition,
            &mut self.lower_partition,
        );

        let lower_pruned = build_half_hull(
            &mut self.lower_partition,
            &mut self.lower_hull,
            &extremes,
            LOWER,
            self.tolerance,
        );
        let upper_pruned = build_half_hull(
            &mut self.upper_partition,
            &mut self.upper_hull,
            &extremes,
            UPPER,
            self.tolerance,
        );
        if !lower_pruned && !upper_pruned {
            return false;
        }

        let mut res: Vec<T> = Vec::with_capacity(size);
        let lower_len = self.lower_hull.len();
        res.extend(self.lower_hull.drain(..lower_len - 1));
        res.extend(self.upper_hull.drain(1..).rev());

        debug_assert!(res.len() <= size, "hull grew: {} > {}", res.len(), size);
        std::mem::swap(points, &mut res);
        true
    }
}

/// Scan one half from `left` to `right`; returns whether any point was dropped.
///
/// `input` is consumed (left empty). `factor` is `LOWER` or `UPPER`.
fn build_half_hull<T: Located + Clone>(
    input: &mut Vec<T>,
    output: &mut Vec<T>,
    extremes: &Extremes<T>,
    factor: i32,
    tolerance: Tolerance,
) -> bool {
    output.reserve(input.len() + 2);
    input.push(extremes.right.clone());
    output.push(extremes.left.clone());

    let mut pruned = false;
    for item in input.drain(..) {
        output.push(item);
        while output.len() >= 3 {
            let n = output.len();
            let turn = direction(
                &output[n - 3].location(),
                &output[n - 1].location(),
                &output[n - 2].location(),
                tolerance,
            );
            if factor * turn > 0 {
                break;
            }
            // drop the middle of the last three
            if let Some(newest) = output.pop() {
                output.pop();
                output.push(newest);
            }
            pruned = true;
        }
    }
    pruned
}
