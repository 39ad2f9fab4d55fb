use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use geoconv_core::{
    EcefCoord, Ellipsoid, EnuOffset, LlaCoord, NedOffset, OriginConvention, ecef_to_enu_with,
    ecef_to_lla, ecef_to_ned_with,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default reference point for the local ENU/NED frame: London, UK.
const DEFAULT_REF_LAT: f64 = 51.5074;
const DEFAULT_REF_LON: f64 = -0.1278;
const DEFAULT_REF_ALT: f64 = 0.0;

/// Convert an ECEF position to geodetic LLA and local ENU/NED offsets
#[derive(Parser, Debug)]
#[command(name = "geoconv", version)]
struct Cli {
    /// Reference latitude in degrees
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_REF_LAT)]
    ref_lat: f64,

    /// Reference longitude in degrees
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_REF_LON)]
    ref_lon: f64,

    /// Reference altitude in meters
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_REF_ALT)]
    ref_alt: f64,

    /// Ellipsoid semi-major axis in meters
    #[arg(long, default_value_t = Ellipsoid::WGS84.semi_major_axis)]
    semi_major_axis: f64,

    /// Ellipsoid first eccentricity squared
    #[arg(long, default_value_t = Ellipsoid::WGS84.eccentricity_sq)]
    eccentricity_sq: f64,

    /// Derive the frame origin with the full ellipsoidal transform instead
    /// of the legacy (a + alt) scaling
    #[arg(long)]
    ellipsoidal_origin: bool,

    /// Emit the results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to parse {axis}: {value:?} is not a number")]
    InputParse { axis: &'static str, value: String },

    #[error(transparent)]
    Coordinate(#[from] geoconv_core::CoordinateError),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Serialize)]
struct Report {
    lla: LlaCoord,
    enu: EnuOffset,
    ned: NedOffset,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ellipsoid = Ellipsoid::new(cli.semi_major_axis, cli.eccentricity_sq);
    let reference = LlaCoord::try_new(cli.ref_lat, cli.ref_lon, cli.ref_alt)?;
    let origin = if cli.ellipsoidal_origin {
        OriginConvention::Ellipsoidal
    } else {
        OriginConvention::SemiMajorAxis
    };
    debug!(?reference, ?origin, "resolved local frame");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter ECEF coordinates (x, y, z) in meters:");
    let x = prompt_coord(&mut lines, "X")?;
    let y = prompt_coord(&mut lines, "Y")?;
    let z = prompt_coord(&mut lines, "Z")?;

    let ecef = EcefCoord::new(x, y, z);
    let lla = ecef_to_lla(&ecef, &ellipsoid);
    let enu = ecef_to_enu_with(&ecef, &reference, &ellipsoid, origin);
    let ned = ecef_to_ned_with(&ecef, &reference, &ellipsoid, origin);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Report { lla, enu, ned })?);
    } else {
        print_report(&lla, &enu, &ned);
    }

    Ok(())
}

fn prompt_coord<B: BufRead>(input: &mut io::Lines<B>, axis: &'static str) -> Result<f64, CliError> {
    print!("{axis}: ");
    io::stdout().flush()?;

    let line = input.next().transpose()?.unwrap_or_default();
    parse_coord(axis, &line)
}

/// Strict float parse; malformed input is an error, never a coercion.
fn parse_coord(axis: &'static str, raw: &str) -> Result<f64, CliError> {
    raw.trim().parse().map_err(|_| CliError::InputParse {
        axis,
        value: raw.trim().to_string(),
    })
}

fn print_report(lla: &LlaCoord, enu: &EnuOffset, ned: &NedOffset) {
    println!(
        "LLA: Latitude: {:.6}, Longitude: {:.6}, Altitude: {:.2} m",
        lla.lat, lla.lon, lla.alt
    );
    println!(
        "ENU: East: {:.2} m, North: {:.2} m, Up: {:.2} m",
        enu.east, enu.north, enu.up
    );
    println!(
        "NED: North: {:.2} m, East: {:.2} m, Down: {:.2} m",
        ned.north, ned.east, ned.down
    );
}
