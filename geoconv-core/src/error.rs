use thiserror::Error;

/// Validation errors for geodetic inputs crossing the crate boundary.
///
/// The transforms themselves are total over finite floating-point inputs and
/// never return these; only checked constructors do.
#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),
}

pub type Result<T> = std::result::Result<T, CoordinateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_display() {
        let err = CoordinateError::InvalidLatitude(95.0);
        assert_eq!(err.to_string(), "Invalid latitude: 95 (must be -90 to 90)");

        let err = CoordinateError::InvalidLongitude(200.0);
        assert_eq!(
            err.to_string(),
            "Invalid longitude: 200 (must be -180 to 180)"
        );
    }
}
