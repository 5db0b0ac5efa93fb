//! Orientation primitive: dead-zone sign and the three-point turn test.
//!
//! Convention (kept exactly; the half-hull factors are calibrated to it)
//! - Translate so that `p1` is the origin and take `cross(p0 - p1, p2 - p1)`.
//!   Positive means `p2` turned right, negative left, zero straight.
//! - Longitude is the x-axis, latitude the y-axis, raw radians.

use std::fmt;
use std::str::FromStr;

use crate::point::GeoPoint;

/// Dead-zone width used by orientation tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Absolute dead zone `[-t, t]`.
    Fixed(f64),
    /// Per test: `max(|t1|, |t2|) / 10` of the two cross-product terms.
    Auto,
}

impl Tolerance {
    #[inline]
    fn resolve(self, t1: f64, t2: f64) -> f64 {
        match self {
            Tolerance::Fixed(t) => t,
            Tolerance::Auto => t1.abs().max(t2.abs()) / 10.0,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Fixed(1e-8)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Fixed(t) => write!(f, "{t}"),
            Tolerance::Auto => f.write_str("auto"),
        }
    }
}

/// Rejected tolerance literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ToleranceParseError {
    input: String,
}

impl fmt::Display for ToleranceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tolerance {:?}: expected \"auto\" or a non-negative number",
            self.input
        )
    }
}

impl std::error::Error for ToleranceParseError {}

impl FromStr for Tolerance {
    type Err = ToleranceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Tolerance::Auto);
        }
        match s.parse::<f64>() {
            Ok(t) if t.is_finite() && t >= 0.0 => Ok(Tolerance::Fixed(t)),
            _ => Err(ToleranceParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// `+1` above the dead zone, `-1` below it, `0` inside.
#[inline]
pub fn sign(value: f64, tolerance: f64) -> i32 {
    if value > tolerance {
        1
    } else if value < -tolerance {
        -1
    } else {
        0
    }
}

/// Turn taken by the path `p0 → p1 → p2` (see module docs for the sign).
#[inline]
pub fn direction(p0: &GeoPoint, p1: &GeoPoint, p2: &GeoPoint, tolerance: Tolerance) -> i32 {
    let a = *p0 - *p1;
    let b = *p2 - *p1;
    let t1 = a.x * b.y;
    let t2 = b.x * a.y;
    sign(t1 - t2, tolerance.resolve(t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(
            crate::point::Angle::radians(x),
            crate::point::Angle::radians(y),
        )
    }

    #[test]
    fn sign_has_closed_dead_zone() {
        assert_eq!(sign(0.5, 0.5), 0);
        assert_eq!(sign(-0.5, 0.5), 0);
        assert_eq!(sign(0.50001, 0.5), 1);
        assert_eq!(sign(-0.50001, 0.5), -1);
        assert_eq!(sign(0.0, 0.0), 0);
    }

    #[test]
    fn direction_sign_convention() {
        let left = p(0.0, 0.0);
        let right = p(10.0, 0.0);
        // Above the chord left→right reads as negative, below as positive.
        assert_eq!(direction(&left, &right, &p(5.0, 5.0), Tolerance::Fixed(0.0)), -1);
        assert_eq!(direction(&left, &right, &p(5.0, -5.0), Tolerance::Fixed(0.0)), 1);
        assert_eq!(direction(&left, &right, &p(5.0, 0.0), Tolerance::Fixed(0.0)), 0);
    }

    #[test]
    fn fixed_tolerance_absorbs_small_deviation() {
        let left = p(0.0, 0.0);
        let right = p(10.0, 0.0);
        let near = p(5.0, -0.001);
        // t1 - t2 = 0.01
        assert_eq!(direction(&left, &right, &near, Tolerance::Fixed(0.0)), 1);
        assert_eq!(direction(&left, &right, &near, Tolerance::Fixed(0.1)), 0);
    }

    #[test]
    fn auto_tolerance_scales_with_operands() {
        // Both terms large and nearly equal: relative difference below 10%.
        let p0 = p(-10.0, -10.0);
        let p1 = p(0.0, 0.0);
        let p2 = p(10.0, 10.5);
        assert_eq!(direction(&p0, &p1, &p2, Tolerance::Auto), 0);
        assert_ne!(direction(&p0, &p1, &p2, Tolerance::Fixed(0.0)), 0);
        // Same shape at a tiny scale keeps the same verdict.
        let s = 1e-6;
        let q0 = p(-10.0 * s, -10.0 * s);
        let q2 = p(10.0 * s, 10.5 * s);
        assert_eq!(direction(&q0, &p1, &q2, Tolerance::Auto), 0);
    }

    #[test]
    fn tolerance_parsing_and_display() {
        assert_eq!("auto".parse::<Tolerance>().unwrap(), Tolerance::Auto);
        assert_eq!("AUTO".parse::<Tolerance>().unwrap(), Tolerance::Auto);
        assert_eq!("1e-6".parse::<Tolerance>().unwrap(), Tolerance::Fixed(1e-6));
        assert!("-1".parse::<Tolerance>().is_err());
        assert!("nan".parse::<Tolerance>().is_err());
        assert_eq!(Tolerance::Auto.to_string(), "auto");
        let default = Tolerance::default();
        assert_eq!(default.to_string().parse::<Tolerance>().unwrap(), default);
    }
}
