//! Convex-hull pruning of geographic point sets.
//!
//! Purpose
//! - Given a `Vec` of located items, drop the ones that are interior to (or on
//!   an edge of) the convex hull of their locations, in place.
//! - Report whether anything was dropped, so callers can skip downstream work
//!   when the set already is its own hull.
//!
//! Numerics
//! - Longitude/latitude are used as planar x/y in raw radians.
//! - Every turn test runs through a dead zone (`Tolerance`). `Fixed(t)` is an
//!   absolute band; `Auto` scales with the cross-product terms of each test.
//!
//! Code cross-refs: `GrahamScan`, `orient::{sign, direction}`, `partition`

mod graham;
pub mod orient;
mod partition;

pub use graham::GrahamScan;
pub use orient::{direction, sign, Tolerance, ToleranceParseError};

use crate::point::Located;

/// One-shot `GrahamScan::prune_interior`.
pub fn prune_interior<T: Located + Clone>(points: &mut Vec<T>, tolerance: Tolerance) -> bool {
    GrahamScan::new(tolerance).prune_interior(points)
}

/// Hull operations on an owned point sequence.
pub trait PruneInterior {
    /// Drop non-hull items in place; `true` if anything was removed.
    fn prune_interior(&mut self, tolerance: Tolerance) -> bool;

    /// `true` if pruning would remove nothing (the set is its own hull).
    fn is_convex(&self, tolerance: Tolerance) -> bool;
}

impl<T: Located + Clone> PruneInterior for Vec<T> {
    fn prune_interior(&mut self, tolerance: Tolerance) -> bool {
        prune_interior(self, tolerance)
    }

    fn is_convex(&self, tolerance: Tolerance) -> bool {
        let mut copy = self.clone();
        !prune_interior(&mut copy, tolerance)
    }
}
