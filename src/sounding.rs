//! Sounding curves: the two-layer response over a series of growing arrays.

use polars::prelude::*;
use tracing::debug;

use crate::error::{validate_model, Error, Result};
use crate::resistance::ResistanceTwoLayer;
use crate::system::TetrapolarSystem;

/// Potential to current spacing ratio `s / l`
pub const SPACING_RATIO: f64 = 1.0 / 3.0;
/// Smallest current electrode spacing in metres
pub const L_MIN: f64 = 0.01;
/// Largest current electrode spacing in metres
pub const L_MAX: f64 = 10.0;
/// Ten points per decade over the default range
pub const POINTS: usize = 31;

/// Array sizes visited by a sounding.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundingSettings {
    /// Potential to current spacing ratio `s / l`, in `(0, 1)`
    pub ratio: f64,
    /// Smallest current electrode spacing (m)
    pub l_min: f64,
    /// Largest current electrode spacing (m)
    pub l_max: f64,
    /// Number of arrays, log-spaced between `l_min` and `l_max`
    pub points: usize,
}

impl Default for SoundingSettings {
    fn default() -> Self {
        Self {
            ratio: SPACING_RATIO,
            l_min: L_MIN,
            l_max: L_MAX,
            points: POINTS,
        }
    }
}

impl SoundingSettings {
    /// Electrode arrays in order of increasing current spacing.
    pub fn systems(&self) -> Result<Vec<TetrapolarSystem>> {
        if !(self.ratio > 0.0 && self.ratio < 1.0) {
            return Err(Error::InvalidSounding(format!(
                "spacing ratio must be in (0, 1), got {}",
                self.ratio
            )));
        }
        if !(self.l_min.is_finite() && self.l_min > 0.0 && self.l_max.is_finite()) {
            return Err(Error::InvalidSounding(format!(
                "current spacings must be finite and > 0, got {} and {}",
                self.l_min, self.l_max
            )));
        }
        if self.l_max < self.l_min {
            return Err(Error::InvalidSounding(format!(
                "l_max ({}) is below l_min ({})",
                self.l_max, self.l_min
            )));
        }
        if self.points == 0 {
            return Err(Error::InvalidSounding("at least one point is required".into()));
        }
        if self.points > 1 && self.l_max == self.l_min {
            return Err(Error::InvalidSounding(format!(
                "{} points need l_max above l_min, both are {}",
                self.points, self.l_min
            )));
        }

        let step = if self.points > 1 {
            (self.l_max / self.l_min).ln() / (self.points - 1) as f64
        } else {
            0.0
        };
        (0..self.points)
            .map(|i| {
                let l = self.l_min * (step * i as f64).exp();
                TetrapolarSystem::new(self.ratio * l, l)
            })
            .collect()
    }
}

/// Evaluate the two-layer model over every array of `settings`.
///
/// # Returns
///
/// A Polars DataFrame with one row per array and columns:
/// - s, l, radius_minus, radius_plus
/// - resistance (Ohm), apparent_resistivity (Ohm-m)
pub fn get_sounding_curve(
    rho1: f64,
    rho2: f64,
    h: f64,
    settings: &SoundingSettings,
) -> Result<DataFrame> {
    validate_model(rho1, rho2, h)?;
    let systems = settings.systems()?;
    debug!(
        "Sounding {} arrays from l = {} m to l = {} m",
        systems.len(),
        settings.l_min,
        settings.l_max
    );

    let (resistance, apparent): (Vec<f64>, Vec<f64>) = systems
        .iter()
        .map(|system| {
            let model = ResistanceTwoLayer::new(*system);
            let value = model.value(rho1, rho2, h);
            (value, value / model.one_layer().geometric_factor())
        })
        .unzip();

    let df = df!(
        "s" => systems.iter().map(|x| x.s()).collect::<Vec<f64>>(),
        "l" => systems.iter().map(|x| x.l()).collect::<Vec<f64>>(),
        "radius_minus" => systems.iter().map(|x| x.radius_minus()).collect::<Vec<f64>>(),
        "radius_plus" => systems.iter().map(|x| x.radius_plus()).collect::<Vec<f64>>(),
        "resistance" => resistance,
        "apparent_resistivity" => apparent,
    )?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(df: &DataFrame, name: &str) -> Vec<f64> {
        df.column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn default_systems_are_log_spaced() {
        let systems = SoundingSettings::default().systems().unwrap();
        assert_eq!(systems.len(), POINTS);
        assert!((systems[0].l() - L_MIN).abs() < 1e-12);
        assert!((systems[POINTS - 1].l() - L_MAX).abs() < 1e-9);
        // ten points per decade
        assert!((systems[10].l() - 0.1).abs() < 1e-12);
        for w in systems.windows(2) {
            assert!(w[1].l() > w[0].l());
            assert!((w[0].s() / w[0].l() - SPACING_RATIO).abs() < 1e-9);
        }
    }

    #[test]
    fn single_point_uses_l_min() {
        let settings = SoundingSettings {
            points: 1,
            ..Default::default()
        };
        let systems = settings.systems().unwrap();
        assert_eq!(systems.len(), 1);
        assert!((systems[0].l() - L_MIN).abs() < 1e-12);

        let fixed = SoundingSettings {
            l_min: 2.0,
            l_max: 2.0,
            points: 1,
            ..Default::default()
        };
        assert_eq!(fixed.systems().unwrap().len(), 1);
    }

    #[test]
    fn rejects_bad_settings() {
        let bad = [
            SoundingSettings {
                ratio: 1.0,
                ..Default::default()
            },
            SoundingSettings {
                ratio: 0.0,
                ..Default::default()
            },
            SoundingSettings {
                l_min: 0.0,
                ..Default::default()
            },
            SoundingSettings {
                l_min: 1.0,
                l_max: 0.5,
                ..Default::default()
            },
            SoundingSettings {
                points: 0,
                ..Default::default()
            },
            SoundingSettings {
                l_min: 2.0,
                l_max: 2.0,
                points: 5,
                ..Default::default()
            },
        ];
        for settings in bad {
            assert!(
                matches!(settings.systems(), Err(Error::InvalidSounding(_))),
                "{settings:?} accepted"
            );
        }
    }

    #[test]
    fn curve_goes_from_top_to_bottom_layer() {
        let df = get_sounding_curve(10.0, 100.0, 0.1, &SoundingSettings::default()).unwrap();
        assert_eq!(df.height(), POINTS);

        let rho_a = column(&df, "apparent_resistivity");
        // small arrays only see the top layer, large ones mostly the basement
        assert!((rho_a[0] - 10.0).abs() < 0.5, "got {}", rho_a[0]);
        assert!(rho_a[POINTS - 1] > 80.0, "got {}", rho_a[POINTS - 1]);
        for w in rho_a.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn uniform_ground_has_flat_curve() {
        let df = get_sounding_curve(25.0, 25.0, 1.0, &SoundingSettings::default()).unwrap();
        for rho_a in column(&df, "apparent_resistivity") {
            assert!((rho_a - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_unphysical_model() {
        let settings = SoundingSettings::default();
        assert!(matches!(
            get_sounding_curve(-1.0, 100.0, 0.1, &settings),
            Err(Error::InvalidResistivity { .. })
        ));
        assert!(matches!(
            get_sounding_curve(1.0, 100.0, -0.1, &settings),
            Err(Error::InvalidThickness(_))
        ));
    }
}
