//! Convex-hull pruning for geographic point sets.
//!
//! Layout
//! - `point`: angles, geographic points, located items.
//! - `hull`: orientation test, monotone-chain scan, in-place interior pruning.
//! - `rand`: replayable point clouds for benches, experiments, and tests.
//!
//! API Policy
//! - The crate is small and internal to this workspace. Prefer clarity over
//!   compatibility; breaking changes are fine when they improve the design.

pub mod hull;
pub mod point;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{prune_interior, GrahamScan, PruneInterior, Tolerance};
pub use point::{Angle, GeoPoint, Located, SearchPoint};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{direction, prune_interior, GrahamScan, PruneInterior, Tolerance};
    pub use crate::point::{Angle, GeoPoint, Located, SearchPoint};
    pub use crate::rand::{draw_cloud, CloudCfg, GeneratorError, ReplayToken};
}
