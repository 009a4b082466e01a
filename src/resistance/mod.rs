//! Resistance between the electrodes of a [`TetrapolarSystem`](crate::TetrapolarSystem).
//!
//! [`ResistanceOneLayer`] covers a uniform half-space. [`ResistanceTwoLayer`]
//! adds the method-of-images correction for a layer of thickness `h` over a
//! semi-infinite basement.

mod one_layer;
mod two_layer;

pub use one_layer::{apparent_resistivity, two_rho_by_pi, ResistanceOneLayer};
pub use two_layer::{k12, rho1_to_rho2, ResistanceTwoLayer};
