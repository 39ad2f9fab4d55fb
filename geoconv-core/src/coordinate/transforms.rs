use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::error::{CoordinateError, Result};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), meters
pub type EcefCoord = Vector3<f64>;

/// LLA coordinates (Latitude, Longitude, Altitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LlaCoord {
    pub lat: f64, // degrees
    pub lon: f64, // degrees
    pub alt: f64, // meters above the reference ellipsoid
}

impl LlaCoord {
    /// Create an LLA coordinate without range checks.
    pub const fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Create an LLA coordinate, rejecting out-of-range latitude or
    /// longitude.
    pub fn try_new(lat: f64, lon: f64, alt: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon, alt })
    }
}

/// Convert ECEF to LLA (Latitude, Longitude, Altitude).
///
/// Closed-form Bowring solution: a parametric-latitude seed followed by a
/// single correction, accurate to well below a microdegree for terrestrial
/// points. Total over all finite inputs; NaN and infinity propagate.
pub fn ecef_to_lla(ecef: &EcefCoord, ellipsoid: &Ellipsoid) -> LlaCoord {
    let a = ellipsoid.semi_major_axis;
    let e2 = ellipsoid.eccentricity_sq;
    let b = ellipsoid.semi_minor_axis();

    let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();
    if p == 0.0 {
        // Exactly on the polar axis. Longitude is 0 by convention, and the
        // altitude formula below would divide by cos(+-90 deg).
        return LlaCoord {
            lat: 90.0_f64.copysign(ecef.z),
            lon: 0.0,
            alt: ecef.z.abs() - b,
        };
    }

    let lon = ecef.y.atan2(ecef.x);

    let theta = (ecef.z * a).atan2(p * b);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let ep2 = ellipsoid.second_eccentricity_sq();
    let lat = (ecef.z + ep2 * b * sin_theta.powi(3)).atan2(p - e2 * a * cos_theta.powi(3));

    let n = ellipsoid.prime_vertical_radius(lat);
    let alt = p / lat.cos() - n;

    LlaCoord {
        lat: lat.to_degrees(),
        lon: lon.to_degrees(),
        alt,
    }
}

/// Convert LLA to ECEF.
pub fn lla_to_ecef(lla: &LlaCoord, ellipsoid: &Ellipsoid) -> EcefCoord {
    let lat_rad = lla.lat.to_radians();
    let lon_rad = lla.lon.to_radians();

    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let n = ellipsoid.prime_vertical_radius(lat_rad);

    let x = (n + lla.alt) * cos_lat * cos_lon;
    let y = (n + lla.alt) * cos_lat * sin_lon;
    let z = (n * (1.0 - ellipsoid.eccentricity_sq) + lla.alt) * sin_lat;

    Vector3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WGS84: Ellipsoid = Ellipsoid::WGS84;

    fn assert_roundtrip(lla: LlaCoord) {
        let ecef = lla_to_ecef(&lla, &WGS84);
        let back = ecef_to_lla(&ecef, &WGS84);

        assert!((lla.lat - back.lat).abs() < 1e-6);
        assert!((lla.lon - back.lon).abs() < 1e-6);
        assert!((lla.alt - back.alt).abs() < 1e-3);
    }

    #[test]
    fn test_lla_ecef_roundtrip() {
        // Washington DC
        assert_roundtrip(LlaCoord::new(38.8977, -77.0365, 100.0));
    }

    #[test]
    fn test_equator_prime_meridian() {
        // A point on the equator at the prime meridian sits one semi-major
        // axis along x
        let lla = ecef_to_lla(&EcefCoord::new(WGS84.semi_major_axis, 0.0, 0.0), &WGS84);

        assert!(lla.lat.abs() < 1e-9);
        assert!(lla.lon.abs() < 1e-9);
        assert!(lla.alt.abs() < 1e-6);
    }

    #[test]
    fn test_poles_on_axis() {
        // Exactly on the polar axis p is 0; longitude falls back to 0 and
        // altitude is measured against the polar radius
        let b = WGS84.semi_minor_axis();

        let north = ecef_to_lla(&EcefCoord::new(0.0, 0.0, b), &WGS84);
        assert_eq!(north.lat, 90.0);
        assert_eq!(north.lon, 0.0);
        assert!(north.alt.abs() < 1e-6);

        let south = ecef_to_lla(&EcefCoord::new(0.0, 0.0, -(b + 500.0)), &WGS84);
        assert_eq!(south.lat, -90.0);
        assert_eq!(south.lon, 0.0);
        assert!((south.alt - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip_near_poles() {
        assert_roundtrip(LlaCoord::new(89.0, 120.0, 1000.0));
        assert_roundtrip(LlaCoord::new(-89.0, -120.0, 1000.0));
    }

    #[test]
    fn test_high_altitude() {
        assert_roundtrip(LlaCoord::new(45.0, 90.0, 100_000.0));
    }

    #[test]
    fn test_negative_altitude() {
        // Dead Sea is about 430m below sea level
        assert_roundtrip(LlaCoord::new(31.5, 35.5, -430.0));
    }

    #[test]
    fn test_known_location_tokyo() {
        assert_roundtrip(LlaCoord::new(35.6762, 139.6503, 40.0));
    }

    #[test]
    fn test_known_location_sydney() {
        // Southern hemisphere
        assert_roundtrip(LlaCoord::new(-33.8688, 151.2093, 50.0));
    }

    #[test]
    fn test_longitude_wraparound() {
        // 181 degrees points the same way as -179
        let ecef1 = lla_to_ecef(&LlaCoord::new(40.0, 181.0, 100.0), &WGS84);
        let ecef2 = lla_to_ecef(&LlaCoord::new(40.0, -179.0, 100.0), &WGS84);

        assert!((ecef1 - ecef2).norm() < 1.0);
    }

    #[test]
    fn test_custom_ellipsoid() {
        // On a sphere the geodetic and geocentric latitudes coincide
        let sphere = Ellipsoid::new(6_371_000.0, 0.0);
        let ecef = lla_to_ecef(&LlaCoord::new(45.0, 45.0, 0.0), &sphere);
        let back = ecef_to_lla(&ecef, &sphere);

        assert!((back.lat - 45.0).abs() < 1e-9);
        assert!((back.lon - 45.0).abs() < 1e-9);
        assert!(back.alt.abs() < 1e-6);
        assert!((ecef.norm() - 6_371_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_golden_fixture_lla() {
        // Pinned regression values for the ECEF input (4200000, 170000,
        // 4780000); a point roughly over Paris, ~731 m below the ellipsoid
        let lla = ecef_to_lla(&EcefCoord::new(4_200_000.0, 170_000.0, 4_780_000.0), &WGS84);

        assert!((lla.lat - 48.863015338693316).abs() < 1e-9);
        assert!((lla.lon - 2.3178496429030186).abs() < 1e-9);
        assert!((lla.alt - -731.2205883869901).abs() < 1e-6);
    }

    #[test]
    fn test_try_new_validation() {
        assert!(LlaCoord::try_new(51.5074, -0.1278, 0.0).is_ok());
        assert!(LlaCoord::try_new(90.0, 180.0, -1000.0).is_ok());

        assert!(matches!(
            LlaCoord::try_new(95.0, 0.0, 0.0),
            Err(CoordinateError::InvalidLatitude(_))
        ));
        assert!(matches!(
            LlaCoord::try_new(0.0, -200.0, 0.0),
            Err(CoordinateError::InvalidLongitude(_))
        ));
    }
}
