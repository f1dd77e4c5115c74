use geo::{point, GeodesicDistance};

use crate::models::Monument;

/// Geodesic distance between two coordinates in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance along the WGS84 ellipsoid in kilometers
#[inline]
pub fn geodesic_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = point!(x: lon1, y: lat1);
    let to = point!(x: lon2, y: lat2);
    from.geodesic_distance(&to) / 1000.0
}

/// Catalog-relative distance scores for a visitor position
///
/// Each monument scores `1 - d_i / max_d` where `max_d` is the largest
/// visitor-to-monument distance in this catalog, so the nearest entries
/// approach 1.0 and the farthest entry gets exactly 0.0. The scale is
/// relative to the catalog, not absolute: a different catalog yields
/// different scores for the same visitor.
///
/// A single-monument catalog is degenerate: the sole entry is trivially
/// the closest and scores 1.0. Likewise when every monument sits at the
/// visitor's exact position (`max_d == 0`) every monument scores 1.0.
/// Neither case divides by zero.
pub fn distance_scores(latitude: f64, longitude: f64, monuments: &[Monument]) -> Vec<f64> {
    if monuments.len() <= 1 {
        return vec![1.0; monuments.len()];
    }

    let distances: Vec<f64> = monuments
        .iter()
        .map(|m| geodesic_distance_km(latitude, longitude, m.latitude, m.longitude))
        .collect();

    let max_distance = distances.iter().cloned().fold(0.0_f64, f64::max);

    if max_distance == 0.0 {
        return vec![1.0; monuments.len()];
    }

    distances.iter().map(|d| 1.0 - d / max_distance).collect()
}
