//! Uniform half-space resistance.

use std::f64::consts::PI;

use crate::system::TetrapolarSystem;

/// Scaling shared by the homogeneous term and the image series: `2ρ/π`.
///
/// A surface point electrode injecting current `I` into a half-space of
/// resistivity `ρ` raises the potential at distance `r` by `ρI / (2πr)`.
/// Written with the full-length radii of [`TetrapolarSystem`] (twice the
/// electrode distances) and differenced across the potential pair, the
/// prefactor becomes `2ρ/π`.
pub fn two_rho_by_pi(rho: f64) -> f64 {
    2.0 * rho / PI
}

/// Resistance measured over a half-space of a single resistivity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceOneLayer {
    system: TetrapolarSystem,
}

impl ResistanceOneLayer {
    /// Resistance calculator for the given array.
    pub fn new(system: TetrapolarSystem) -> Self {
        Self { system }
    }

    /// Resistance in Ohm for resistivity `rho` in Ohm-m.
    ///
    /// `R = 2ρ/π · (1/r- − 1/r+)`. No validation: a non-positive or
    /// non-finite `rho` simply propagates through the arithmetic.
    pub fn value(&self, rho: f64) -> f64 {
        two_rho_by_pi(rho)
            * (1.0 / self.system.radius_minus() - 1.0 / self.system.radius_plus())
    }

    /// Resistance over a 1 Ohm-m half-space, i.e. `R / ρ` for this array.
    pub fn geometric_factor(&self) -> f64 {
        self.value(1.0)
    }

    /// The array this calculator was built for.
    pub fn electrode_system(&self) -> &TetrapolarSystem {
        &self.system
    }
}

/// Apparent resistivity in Ohm-m seen by `system` when it measures `resistance` Ohm.
pub fn apparent_resistivity(system: TetrapolarSystem, resistance: f64) -> f64 {
    resistance / ResistanceOneLayer::new(system).geometric_factor()
}
