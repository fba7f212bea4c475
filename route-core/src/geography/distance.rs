//! Geodesic distance on the WGS-84 ellipsoid.
//!
//! Delegates to `geo`'s Karney geodesic, which is accurate to well under a
//! millimetre, so the only conversion here is metres to nautical miles.

use geo::{GeodesicDistance, Point};

use crate::types::LatLon;

/// Metres in one international nautical mile.
pub const METRES_PER_NM: f64 = 1852.0;

/// Great-circle distance between two points, in nautical miles.
pub fn distance_nm(from: LatLon, to: LatLon) -> f64 {
    // geo points are (x, y) = (lon, lat)
    let a = Point::new(from.lon, from.lat);
    let b = Point::new(to.lon, to.lat);
    a.geodesic_distance(&b) / METRES_PER_NM
}

/// Arithmetic mean of two coordinates with a latitude offset applied.
///
/// This is a plain coordinate average, not the geodesic midpoint.
pub fn offset_midpoint(from: LatLon, to: LatLon, lat_offset: f64) -> LatLon {
    LatLon {
        lat: (from.lat + to.lat) / 2.0 + lat_offset,
        lon: (from.lon + to.lon) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSLO: LatLon = LatLon::new(59.9139, 10.7522);
    const HAMBURG: LatLon = LatLon::new(53.5511, 9.9937);
    const SINGAPORE: LatLon = LatLon::new(1.2966, 103.7764);
    const ROTTERDAM: LatLon = LatLon::new(51.9244, 4.4777);

    fn assert_close_rel(actual: f64, expected: f64, tolerance: f64) {
        let rel = (actual - expected).abs() / expected;
        assert!(
            rel < tolerance,
            "actual={actual:.3}, expected={expected:.3}, rel={rel:.6}"
        );
    }

    #[test]
    fn test_distance_matches_ellipsoidal_reference() {
        // Reference values from an independent Vincenty inverse solution.
        assert_close_rel(distance_nm(OSLO, HAMBURG), 383.388, 0.001);
        assert_close_rel(distance_nm(SINGAPORE, ROTTERDAM), 5687.28, 0.001);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_identity() {
        let ab = distance_nm(OSLO, HAMBURG);
        let ba = distance_nm(HAMBURG, OSLO);
        assert!((ab - ba).abs() < 1e-6, "ab={ab}, ba={ba}");
        assert!(distance_nm(OSLO, OSLO).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude_is_about_sixty_nm() {
        let d = distance_nm(LatLon::new(0.0, 0.0), LatLon::new(1.0, 0.0));
        assert!(d > 59.5 && d < 60.5, "d = {}", d);
    }

    #[test]
    fn test_offset_midpoint() {
        let mid = offset_midpoint(OSLO, HAMBURG, 1.0);
        assert!((mid.lat - 57.7325).abs() < 1e-9);
        assert!((mid.lon - 10.37295).abs() < 1e-9);

        let mid = offset_midpoint(OSLO, HAMBURG, -0.5);
        assert!((mid.lat - 56.2325).abs() < 1e-9);
    }
}
