//! Geographic points and located items.
//!
//! - `Angle`: raw radians with degree conversions.
//! - `GeoPoint`: (longitude, latitude); subtraction yields a planar `Vector2`
//!   with `x = Δlongitude`, `y = Δlatitude` in radians.
//! - `Located`: anything carrying a `GeoPoint` (the hull only looks at this).
//! - `SearchPoint<P>`: a location paired with an opaque payload.
//!
//! Conventions
//! - Coordinates are treated as a local planar approximation. No geodesic
//!   correction is applied anywhere in this crate.
//! - NaN/infinite coordinates are not validated.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::ops::Sub;

/// Angle stored natively in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    #[inline]
    pub const fn radians(value: f64) -> Self {
        Self(value)
    }
    #[inline]
    pub fn degrees(value: f64) -> Self {
        Self(value.to_radians())
    }
    /// Raw numeric value (radians) used in hull arithmetic.
    #[inline]
    pub const fn native(self) -> f64 {
        self.0
    }
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

/// Point on the sphere, used as a planar (longitude, latitude) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    pub longitude: Angle,
    pub latitude: Angle,
}

impl GeoPoint {
    #[inline]
    pub const fn new(longitude: Angle, latitude: Angle) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    #[inline]
    pub fn from_degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(Angle::degrees(longitude), Angle::degrees(latitude))
    }

    /// Planar coordinates `(longitude, latitude)` in radians.
    #[inline]
    pub fn native(&self) -> Vector2<f64> {
        Vector2::new(self.longitude.native(), self.latitude.native())
    }

    /// Ascending longitude, ties broken by ascending latitude.
    ///
    /// Incomparable values (NaN) compare as equal.
    pub fn lexicographic_cmp(&self, other: &GeoPoint) -> Ordering {
        match self
            .longitude
            .partial_cmp(&other.longitude)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self
                .latitude
                .partial_cmp(&other.latitude)
                .unwrap_or(Ordering::Equal),
            o => o,
        }
    }
}

impl Sub for GeoPoint {
    type Output = Vector2<f64>;
    #[inline]
    fn sub(self, rhs: GeoPoint) -> Self::Output {
        self.native() - rhs.native()
    }
}

/// An item with a location. Hull computations compare items by location only.
pub trait Located {
    fn location(&self) -> GeoPoint;

    #[inline]
    fn same_location(&self, other: &Self) -> bool {
        self.location() == other.location()
    }
}

impl Located for GeoPoint {
    #[inline]
    fn location(&self) -> GeoPoint {
        *self
    }
}

/// Location plus caller payload (e.g. a row index or a timestamp).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchPoint<P = ()> {
    pub location: GeoPoint,
    pub payload: P,
}

impl<P> SearchPoint<P> {
    #[inline]
    pub fn new(location: GeoPoint, payload: P) -> Self {
        Self { location, payload }
    }
}

impl<P> Located for SearchPoint<P> {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.location
    }
}
