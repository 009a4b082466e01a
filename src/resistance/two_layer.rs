//! Two-layer half-space resistance by the method of images.

use tracing::trace;

use super::one_layer::{two_rho_by_pi, ResistanceOneLayer};
use crate::system::TetrapolarSystem;

/// Reflection coefficient `k12 = (ρ2 − ρ1) / (ρ2 + ρ1)` of the layer boundary.
///
/// Undefined for `rho1 = rho2 = 0`. For positive resistivities the result lies in `(-1, 1)`.
pub fn k12(rho1: f64, rho2: f64) -> f64 {
    (rho2 - rho1) / (rho2 + rho1)
}

/// Ratio `ρ1 / ρ2` for a reflection coefficient, the inverse of [`k12`].
///
/// Undefined for `k12 = -1`.
pub fn rho1_to_rho2(k12: f64) -> f64 {
    (1.0 - k12) / (1.0 + k12)
}

/// Full resistance between the electrodes for a two-layer model.
///
/// The upper layer has resistivity `rho1` and thickness `h`; the lower one
/// has resistivity `rho2` and extends to infinity. The result is the
/// homogeneous resistance for `rho1` plus the field of the image sources
/// reflected off the layer boundary:
///
/// ```text
/// R = R1(ρ1) + 2 · (2ρ1/π) · Σ k12^n · (1/hypot(r-, 4nh) − 1/hypot(r+, 4nh)),  n = 1, 2, …
/// ```
///
/// # Example
///
/// ```
/// use rsm::{ResistanceTwoLayer, TetrapolarSystem};
///
/// let system = TetrapolarSystem::new(0.01, 0.03).unwrap();
/// let resistance = ResistanceTwoLayer::new(system);
/// let ohms = resistance.value(10.0, 100.0, 0.005);
/// assert!(ohms > resistance.one_layer().value(10.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceTwoLayer {
    one_layer: ResistanceOneLayer,
}

impl ResistanceTwoLayer {
    /// Calculator for the given array.
    pub fn new(system: TetrapolarSystem) -> Self {
        Self {
            one_layer: ResistanceOneLayer::new(system),
        }
    }

    /// Resistance in Ohm.
    ///
    /// * `rho1` - resistivity of the upper layer in Ohm-m
    /// * `rho2` - resistivity of the lower layer in Ohm-m
    /// * `h` - thickness of the upper layer in metres
    ///
    /// `rho1` and `rho2` must both be positive. Otherwise `|k12| >= 1` and
    /// the series may never converge; this is not checked here (see
    /// [`crate::validate_model`]).
    pub fn value(&self, rho1: f64, rho2: f64, h: f64) -> f64 {
        let resistance = self.one_layer.value(rho1);

        // Exact equality, no tolerance: any contrast at all goes through the series.
        if rho1 == rho2 {
            resistance
        } else {
            resistance + 2.0 * two_rho_by_pi(rho1) * self.series(k12(rho1, rho2), h)
        }
    }

    /// Apparent resistivity in Ohm-m the array reports over this model.
    pub fn apparent(&self, rho1: f64, rho2: f64, h: f64) -> f64 {
        self.value(rho1, rho2, h) / self.one_layer.geometric_factor()
    }

    /// The `n`-th image term `k12^n · (1/hypot(r-, 4nh) − 1/hypot(r+, 4nh))`.
    pub fn term(&self, k12: f64, n: u64, h: f64) -> f64 {
        let system = self.one_layer.electrode_system();
        let n = n as f64;
        let b = 4.0 * n * h;
        k12.powf(n)
            * (1.0 / system.radius_minus().hypot(b) - 1.0 / system.radius_plus().hypot(b))
    }

    /// Sum of [`term`](Self::term) over `n = 1, 2, …`.
    ///
    /// Terms are added until one leaves the running sum unchanged at `f64`
    /// precision. There is no iteration cap, so `|k12|` must be below 1.
    pub fn series(&self, k12: f64, h: f64) -> f64 {
        let mut sum = 0.0;
        let mut n: u64 = 1;
        loop {
            let prev = sum;
            sum += self.term(k12, n, h);
            if prev == sum {
                break;
            }
            n += 1;
        }
        trace!("Image series converged after {n} terms: k12 = {k12}, h = {h}, sum = {sum}");
        sum
    }

    /// The homogeneous calculator providing the zero-order term.
    pub fn one_layer(&self) -> &ResistanceOneLayer {
        &self.one_layer
    }
}
