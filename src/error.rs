//! Errors raised when validating user-supplied geometry and model parameters.
//!
//! The resistance calculators themselves never fail; these errors only come
//! from the checked constructors and the convenience functions in the crate root.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation and output errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An electrode spacing is not a finite positive length
    #[error("invalid {name} spacing: {value} (must be finite and > 0)")]
    InvalidSpacing {
        /// `potential` or `current`
        name: &'static str,
        /// Rejected spacing (m)
        value: f64,
    },

    /// Potential and current spacings coincide, so the potential electrodes sit on the current ones
    #[error("potential and current electrodes coincide (s = l = {0})")]
    CoincidentElectrodes(f64),

    /// A layer resistivity is not a finite positive value
    #[error("invalid {name}: {value} Ohm-m (must be finite and > 0)")]
    InvalidResistivity {
        /// `rho1` or `rho2`
        name: &'static str,
        /// Rejected resistivity (Ohm-m)
        value: f64,
    },

    /// The upper-layer thickness is negative or not finite
    #[error("invalid layer thickness h: {0} m (must be finite and >= 0)")]
    InvalidThickness(f64),

    /// Sounding curve settings are inconsistent
    #[error("invalid sounding settings: {0}")]
    InvalidSounding(String),

    /// Building or writing a result table failed
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    /// Output file could not be created
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Check that `rho1`, `rho2` and `h` describe a physical two-layer model.
///
/// Both resistivities must be finite and strictly positive, which keeps the
/// reflection coefficient inside `(-1, 1)` and guarantees the image series converges.
pub fn validate_model(rho1: f64, rho2: f64, h: f64) -> Result<()> {
    for (name, value) in [("rho1", rho1), ("rho2", rho2)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(Error::InvalidResistivity { name, value });
        }
    }
    if !(h.is_finite() && h >= 0.0) {
        return Err(Error::InvalidThickness(h));
    }
    Ok(())
}
