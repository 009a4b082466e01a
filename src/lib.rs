#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # rsm Library
//!
//! Electrical resistance measured by a four-electrode (tetrapolar) linear
//! array placed on a layered half-space. The homogeneous case has a closed
//! form; the two-layer case adds a method-of-images series that is summed
//! until it stops changing at `f64` precision.
//!
//! Sounding curves are returned as Polars DataFrames, which can be written
//! to CSV, Parquet or JSON with [`write_df_to_file`].

mod error;
mod resistance;
pub mod sounding;
mod system;
mod utils;

// Re-export key public types
pub use error::{validate_model, Error, Result};
pub use resistance::{
    apparent_resistivity, k12, rho1_to_rho2, two_rho_by_pi, ResistanceOneLayer,
    ResistanceTwoLayer,
};
pub use sounding::{get_sounding_curve, SoundingSettings};
pub use system::TetrapolarSystem;
pub use utils::{write_df_to_file, DataFrameFileType};

use tracing::debug;

/// Resistance of a single array over a two-layer model, with all inputs checked.
///
/// # Arguments
///
/// * `s` - Distance between the potential electrodes (m)
/// * `l` - Distance between the current electrodes (m)
/// * `rho1` - Resistivity of the upper layer (Ohm-m)
/// * `rho2` - Resistivity of the lower layer (Ohm-m)
/// * `h` - Thickness of the upper layer (m)
///
/// # Returns
///
/// The resistance in Ohm, or an [`Error`] naming the first invalid argument.
///
/// # Example
///
/// ```
/// use rsm::get_resistance;
///
/// let ohms = get_resistance(0.01, 0.03, 10.0, 100.0, 0.005).unwrap();
/// println!("R = {ohms:.4} Ohm");
/// assert!(get_resistance(0.01, 0.03, -10.0, 100.0, 0.005).is_err());
/// ```
pub fn get_resistance(s: f64, l: f64, rho1: f64, rho2: f64, h: f64) -> Result<f64> {
    let system = TetrapolarSystem::new(s, l)?;
    validate_model(rho1, rho2, h)?;

    let resistance = ResistanceTwoLayer::new(system).value(rho1, rho2, h);
    debug!("{system}: rho1 = {rho1}, rho2 = {rho2}, h = {h} -> R = {resistance}");
    Ok(resistance)
}
