pub mod coordinate;
pub mod ellipsoid;
pub mod error;

pub use coordinate::{
    EcefCoord, EnuOffset, LlaCoord, NedOffset, OriginConvention, ecef_to_enu, ecef_to_enu_with,
    ecef_to_lla, ecef_to_ned, ecef_to_ned_with, lla_to_ecef, reference_to_ecef,
};
pub use ellipsoid::Ellipsoid;
pub use error::{CoordinateError, Result};
