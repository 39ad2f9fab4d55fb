use serde::{Deserialize, Serialize};

use crate::coordinate::transforms::{EcefCoord, LlaCoord, lla_to_ecef};
use crate::ellipsoid::Ellipsoid;

/// Offset in a local East-North-Up tangent frame, meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnuOffset {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

/// Offset in a local North-East-Down tangent frame, meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NedOffset {
    pub north: f64,
    pub east: f64,
    pub down: f64,
}

impl From<EnuOffset> for NedOffset {
    /// NED is an axis permutation of ENU, never recomputed from ECEF.
    fn from(enu: EnuOffset) -> Self {
        Self {
            north: enu.north,
            east: enu.east,
            down: -enu.up,
        }
    }
}

/// How the ECEF origin of a local tangent frame is derived from its geodetic
/// reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OriginConvention {
    /// Scale every axis by (a + alt), ignoring the latitude-dependent prime
    /// vertical radius. At mid-latitudes this origin lands tens of
    /// kilometers from the true ellipsoidal position; consumers of existing
    /// ENU/NED outputs expect origins computed this way.
    #[default]
    SemiMajorAxis,
    /// Full ellipsoidal geodetic-to-ECEF origin.
    Ellipsoidal,
}

/// ECEF position of a local-frame reference point under the given origin
/// convention.
pub fn reference_to_ecef(
    reference: &LlaCoord,
    ellipsoid: &Ellipsoid,
    origin: OriginConvention,
) -> EcefCoord {
    match origin {
        OriginConvention::SemiMajorAxis => {
            let lat = reference.lat.to_radians();
            let lon = reference.lon.to_radians();
            let r = ellipsoid.semi_major_axis + reference.alt;

            EcefCoord::new(
                r * lat.cos() * lon.cos(),
                r * lat.cos() * lon.sin(),
                r * lat.sin(),
            )
        }
        OriginConvention::Ellipsoidal => lla_to_ecef(reference, ellipsoid),
    }
}

/// Convert an ECEF position to a local ENU offset about `reference`, using
/// the default origin convention.
pub fn ecef_to_enu(target: &EcefCoord, reference: &LlaCoord, ellipsoid: &Ellipsoid) -> EnuOffset {
    ecef_to_enu_with(target, reference, ellipsoid, OriginConvention::default())
}

/// Convert an ECEF position to a local ENU offset about `reference`.
///
/// The displacement from the frame origin is rotated by the reference
/// latitude/longitude into right-handed East-North-Up axes.
pub fn ecef_to_enu_with(
    target: &EcefCoord,
    reference: &LlaCoord,
    ellipsoid: &Ellipsoid,
    origin: OriginConvention,
) -> EnuOffset {
    let lat = reference.lat.to_radians();
    let lon = reference.lon.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    let delta = target - reference_to_ecef(reference, ellipsoid, origin);

    EnuOffset {
        east: -sin_lon * delta.x + cos_lon * delta.y,
        north: -sin_lat * cos_lon * delta.x - sin_lat * sin_lon * delta.y + cos_lat * delta.z,
        up: cos_lat * cos_lon * delta.x + cos_lat * sin_lon * delta.y + sin_lat * delta.z,
    }
}

/// Convert an ECEF position to a local NED offset about `reference`, using
/// the default origin convention.
pub fn ecef_to_ned(target: &EcefCoord, reference: &LlaCoord, ellipsoid: &Ellipsoid) -> NedOffset {
    ecef_to_enu(target, reference, ellipsoid).into()
}

/// Convert an ECEF position to a local NED offset about `reference`.
pub fn ecef_to_ned_with(
    target: &EcefCoord,
    reference: &LlaCoord,
    ellipsoid: &Ellipsoid,
    origin: OriginConvention,
) -> NedOffset {
    ecef_to_enu_with(target, reference, ellipsoid, origin).into()
}
