//! Coordinate types and frame transformations

mod local;
mod transforms;

pub use local::{
    EnuOffset, NedOffset, OriginConvention, ecef_to_enu, ecef_to_enu_with, ecef_to_ned,
    ecef_to_ned_with, reference_to_ecef,
};
pub use transforms::{EcefCoord, LlaCoord, ecef_to_lla, lla_to_ecef};
