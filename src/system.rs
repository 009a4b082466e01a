//! Geometry of a symmetric linear four-electrode array.

use crate::error::{Error, Result};

/// A tetrapolar electrode array reduced to its two characteristic radii.
///
/// The array has two current electrodes `l` apart and two potential
/// electrodes `s` apart, all on one line and centered on the same point.
/// The radii are the full distances `|l - s|` and `l + s`; the resistance
/// formulas in [`crate::resistance`] are written for this convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TetrapolarSystem {
    radius_minus: f64,
    radius_plus: f64,
}

impl TetrapolarSystem {
    /// Build the array from the potential (`s`) and current (`l`) electrode spacings in metres.
    ///
    /// Both spacings must be finite and positive, and they must differ,
    /// otherwise a potential electrode would sit on a current electrode.
    /// `s > l` is allowed: the reciprocal array measures the same resistance.
    pub fn new(s: f64, l: f64) -> Result<Self> {
        for (name, value) in [("potential", s), ("current", l)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidSpacing { name, value });
            }
        }
        if s == l {
            return Err(Error::CoincidentElectrodes(s));
        }
        Ok(Self::from_radii((l - s).abs(), l + s))
    }

    /// Build the array directly from its radii.
    ///
    /// Both radii must be finite and `> 0`; this is not checked.
    pub const fn from_radii(radius_minus: f64, radius_plus: f64) -> Self {
        Self {
            radius_minus,
            radius_plus,
        }
    }

    /// `|l - s|` in metres
    pub fn radius_minus(&self) -> f64 {
        self.radius_minus
    }

    /// `l + s` in metres
    pub fn radius_plus(&self) -> f64 {
        self.radius_plus
    }

    /// Potential electrode spacing `s` recovered from the radii.
    pub fn s(&self) -> f64 {
        (self.radius_plus - self.radius_minus) / 2.0
    }

    /// Current electrode spacing `l` recovered from the radii.
    pub fn l(&self) -> f64 {
        (self.radius_plus + self.radius_minus) / 2.0
    }
}

impl std::fmt::Display for TetrapolarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "s = {:.4} m, l = {:.4} m (r- = {:.4} m, r+ = {:.4} m)",
            self.s(),
            self.l(),
            self.radius_minus,
            self.radius_plus
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_from_spacings() {
        let system = TetrapolarSystem::new(0.1, 0.3).unwrap();
        assert!((system.radius_minus() - 0.2).abs() < 1e-15);
        assert!((system.radius_plus() - 0.4).abs() < 1e-15);
        assert!((system.s() - 0.1).abs() < 1e-15);
        assert!((system.l() - 0.3).abs() < 1e-15);
    }

    #[test]
    fn reciprocal_array_has_same_radii() {
        let direct = TetrapolarSystem::new(0.1, 0.3).unwrap();
        let reciprocal = TetrapolarSystem::new(0.3, 0.1).unwrap();
        assert_eq!(direct.radius_minus(), reciprocal.radius_minus());
        assert_eq!(direct.radius_plus(), reciprocal.radius_plus());
    }

    #[test]
    fn rejects_invalid_spacings() {
        assert!(matches!(
            TetrapolarSystem::new(0.0, 0.3),
            Err(Error::InvalidSpacing {
                name: "potential",
                ..
            })
        ));
        assert!(matches!(
            TetrapolarSystem::new(0.1, -0.3),
            Err(Error::InvalidSpacing { name: "current", .. })
        ));
        assert!(matches!(
            TetrapolarSystem::new(f64::NAN, 0.3),
            Err(Error::InvalidSpacing { .. })
        ));
        assert!(matches!(
            TetrapolarSystem::new(0.2, 0.2),
            Err(Error::CoincidentElectrodes(_))
        ));
    }

    #[test]
    fn from_radii_keeps_values() {
        let system = TetrapolarSystem::from_radii(0.1, 0.3);
        assert_eq!(system.radius_minus(), 0.1);
        assert_eq!(system.radius_plus(), 0.3);
    }
}
