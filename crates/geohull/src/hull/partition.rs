//! Split a point set along the chord between its lexicographic extremes.

use super::orient::{direction, Tolerance};
use crate::point::Located;

/// Leftmost/rightmost items of a partitioned set.
#[derive(Clone, Debug)]
pub(crate) struct Extremes<T> {
    pub left: T,
    pub right: T,
}

/// Sort a copy of `points` by (longitude, latitude), take the extremes, and
/// distribute the rest into `upper` (strictly above the chord) and `lower`
/// (below or on it). Both outputs keep ascending order.
///
/// Items sharing the location of the last kept item are dropped; after the
/// sort every set of coincident items is contiguous.
///
/// Pre: `points.len() >= 3` (checked by `GrahamScan::prune_interior`).
pub(crate) fn partition<T: Located + Clone>(
    points: &[T],
    tolerance: Tolerance,
    upper: &mut Vec<T>,
    lower: &mut Vec<T>,
) -> Extremes<T> {
    debug_assert!(points.len() >= 3, "partition needs at least 3 points");
    let mut sorted: Vec<T> = points.to_vec();
    sorted.sort_by(|a, b| a.location().lexicographic_cmp(&b.location()));

    let n = sorted.len();
    let left = sorted[0].clone();
    let right = sorted[n - 1].clone();

    upper.reserve(n);
    lower.reserve(n);

    let left_loc = left.location();
    let right_loc = right.location();
    let mut last_kept = &sorted[0];
    for item in &sorted[1..n - 1] {
        if item.same_location(last_kept) {
            continue;
        }
        last_kept = item;
        if direction(&left_loc, &right_loc, &item.location(), tolerance) < 0 {
            upper.push(item.clone());
        } else {
            lower.push(item.clone());
        }
    }

    Extremes { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{GeoPoint, SearchPoint};

    fn sp(lon: f64, lat: f64, id: usize) -> SearchPoint<usize> {
        SearchPoint::new(GeoPoint::from_degrees(lon, lat), id)
    }

    #[test]
    fn extremes_and_sides() {
        let pts = vec![
            sp(5.0, 5.0, 0),
            sp(10.0, 0.0, 1),
            sp(0.0, 0.0, 2),
            sp(5.0, -5.0, 3),
            sp(3.0, 0.0, 4),
        ];
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        let ex = partition(&pts, Tolerance::Fixed(0.0), &mut upper, &mut lower);
        assert_eq!(ex.left.payload, 2);
        assert_eq!(ex.right.payload, 1);
        let up: Vec<usize> = upper.iter().map(|p| p.payload).collect();
        let lo: Vec<usize> = lower.iter().map(|p| p.payload).collect();
        assert_eq!(up, vec![0]);
        // on-chord goes low; ascending longitude preserved
        assert_eq!(lo, vec![4, 3]);
    }

    #[test]
    fn adjacent_duplicates_are_dropped() {
        let pts = vec![
            sp(0.0, 0.0, 0),
            sp(0.0, 0.0, 1),
            sp(4.0, 1.0, 2),
            sp(4.0, 1.0, 3),
            sp(8.0, 0.0, 4),
        ];
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        partition(&pts, Tolerance::Fixed(0.0), &mut upper, &mut lower);
        assert_eq!(upper.len(), 1);
        assert!(lower.is_empty());
    }

    #[test]
    fn coincident_items_with_other_payloads_are_dropped() {
        // same location, different payloads: only the first of each run survives
        let pts = vec![
            sp(0.0, 0.0, 0),
            sp(3.0, -2.0, 1),
            sp(3.0, -2.0, 2),
            sp(3.0, -2.0, 3),
            sp(5.0, 4.0, 4),
            sp(8.0, 0.0, 5),
            sp(0.0, 0.0, 6),
        ];
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        partition(&pts, Tolerance::Fixed(0.0), &mut upper, &mut lower);
        assert_eq!(lower.len(), 1);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].payload, 4);
        assert!(lower[0].same_location(&sp(3.0, -2.0, 9)));
    }
}
