/// Haversine distance in meters.
pub fn distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance() {
        assert!(distance_m(-34.6037, -58.3816, -34.6037, -58.3816) < 1e-6);
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let d = distance_m(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn short_hop_within_city() {
        // Obelisco to Plaza de Mayo, roughly a kilometer.
        let d = distance_m(-34.6037, -58.3816, -34.6083, -58.3712);
        assert!(d > 800.0 && d < 1_500.0, "got {d}");
    }
}
