use serde::{Deserialize, Serialize};

/// Reference ellipsoid parameters.
///
/// Every transform takes the ellipsoid as an explicit argument so callers can
/// substitute a non-WGS84 model without touching process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major (equatorial) axis in meters.
    pub semi_major_axis: f64,
    /// Square of the first eccentricity.
    pub eccentricity_sq: f64,
}

impl Ellipsoid {
    /// WGS84 defining parameters.
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        eccentricity_sq: 0.00669437999014,
    };

    /// Create an ellipsoid from its semi-major axis (meters) and first
    /// eccentricity squared.
    pub const fn new(semi_major_axis: f64, eccentricity_sq: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity_sq,
        }
    }

    /// Semi-minor (polar) axis, b = a * sqrt(1 - e^2).
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity_sq).sqrt()
    }

    /// Second eccentricity squared, e'^2 = e^2 / (1 - e^2).
    pub fn second_eccentricity_sq(&self) -> f64 {
        self.eccentricity_sq / (1.0 - self.eccentricity_sq)
    }

    /// Prime vertical radius of curvature at the given geodetic latitude in
    /// radians, N = a / sqrt(1 - e^2 * sin^2(lat)).
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.semi_major_axis / (1.0 - self.eccentricity_sq * lat.sin().powi(2)).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
