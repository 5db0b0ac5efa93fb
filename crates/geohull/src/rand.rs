//! Random point clouds around a geographic center (replay tokens).
//!
//! Model
//! - `boundary_count` points sit on a circle of `radius_deg` around `center`,
//!   equally spaced after a random phase. With three or more of them they span
//!   a strictly convex polygon.
//! - `interior_count` points are drawn uniformly in the disc inscribed in that
//!   polygon (shrunk by 5%), so the hull of the cloud is exactly the boundary
//!   points. With fewer than three boundary points the interior disc is the
//!   full circle.
//! - Payloads are indices: `0..boundary_count` are the boundary points, the
//!   rest interior. The returned order is shuffled.
//!
//! Offsets are applied to longitude/latitude degrees directly (planar, no
//! cos(latitude) correction).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::point::{GeoPoint, SearchPoint};

/// Error type for cloud generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub center: GeoPoint,
    /// Circle radius in degrees. Must be finite and positive.
    pub radius_deg: f64,
    pub boundary_count: usize,
    pub interior_count: usize,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            center: GeoPoint::from_degrees(7.0, 47.0),
            radius_deg: 1.0,
            boundary_count: 12,
            interior_count: 200,
        }
    }
}

impl CloudCfg {
    #[inline]
    pub fn total(&self) -> usize {
        self.boundary_count + self.interior_count
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.radius_deg.is_finite() && self.radius_deg > 0.0) {
            return Err(GeneratorError::invalid(format!(
                "radius_deg must be finite and > 0 (got {})",
                self.radius_deg
            )));
        }
        if self.total() == 0 {
            return Err(GeneratorError::invalid("cloud would be empty"));
        }
        let c = self.center.native();
        if !(c.x.is_finite() && c.y.is_finite()) {
            return Err(GeneratorError::invalid("center must be finite"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a cloud; the same `(cfg, tok)` always yields the same points.
pub fn draw_cloud(
    cfg: &CloudCfg,
    tok: ReplayToken,
) -> Result<Vec<SearchPoint<usize>>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let (lon0, lat0) = (cfg.center.longitude.to_degrees(), cfg.center.latitude.to_degrees());
    let r = cfg.radius_deg;
    let k = cfg.boundary_count;

    let mut out = Vec::with_capacity(cfg.total());
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let delta = std::f64::consts::TAU / (k.max(1) as f64);
    for i in 0..k {
        let th = phase + (i as f64) * delta;
        let loc = GeoPoint::from_degrees(lon0 + r * th.cos(), lat0 + r * th.sin());
        out.push(SearchPoint::new(loc, i));
    }

    let r_in = if k >= 3 {
        0.95 * r * (std::f64::consts::PI / k as f64).cos()
    } else {
        r
    };
    for i in 0..cfg.interior_count {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        let rho = r_in * rng.gen::<f64>().sqrt();
        let loc = GeoPoint::from_degrees(lon0 + rho * th.cos(), lat0 + rho * th.sin());
        out.push(SearchPoint::new(loc, k + i));
    }

    out.shuffle(&mut rng);
    Ok(out)
}
