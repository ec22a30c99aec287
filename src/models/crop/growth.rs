//! Wheat organ mass-growth models.
//!
//! Each timestep, a crop simulation hands these models the current organ
//! geometry and metabolite pools and gets back mass increments to integrate.
//! The models hold no state between calls.
//!
//! - [`HiddenZoneGrowth`]: leaf and internode segments enclosed in the pseudostem.
//! - [`EmergedTissueGrowth`]: emerged laminae, sheaths and internodes.
//! - [`LeafGrowth`]: one leaf's hidden zone and emerged tissues together, with
//!   metabolite export and consumption.
//! - [`RootGrowth`]: sucrose-limited root growth.
//!
//! All adapters share a [`GrowthKinetics`], which validates the
//! [`GrowthParameters`] once:
//!
//! ```
//! use twine_core::Model;
//! use twine_growthwheat::models::crop::growth::{
//!     GrowthKinetics, GrowthParameters, RootGrowth, RootGrowthInput,
//! };
//! use uom::si::{
//!     amount_of_substance::micromole,
//!     f64::{AmountOfSubstance, Mass, Time},
//!     mass::gram,
//!     time::hour,
//! };
//!
//! let kinetics = GrowthKinetics::new(GrowthParameters::default()).unwrap();
//! let roots = RootGrowth::new(kinetics);
//!
//! let output = roots
//!     .call(&RootGrowthInput {
//!         sucrose: AmountOfSubstance::new::<micromole>(1000.0),
//!         amino_acids: AmountOfSubstance::new::<micromole>(50.0),
//!         mstruct: Mass::new::<gram>(10.0),
//!         delta_t: Time::new::<hour>(1.0),
//!     })
//!     .unwrap();
//!
//! assert!(output.mstruct_growth > Mass::new::<gram>(0.0));
//! ```

mod core;
mod emerged_tissue;
mod hidden_zone;
mod leaf;
mod roots;

pub use self::core::{
    Allometry, AutomateCurve, EmergedTissue, GrowthError, GrowthKinetics, GrowthParameters,
    GrowthParametersError, Organ, RootGrowthOutput, RootKinetics, Stoichiometry,
    SucroseConsumption, TissueDeltas,
};
pub use emerged_tissue::{EmergedTissueGrowth, EmergedTissueInput};
pub use hidden_zone::{HiddenZoneGrowth, HiddenZoneInput, HiddenZonePhase};
pub use leaf::{LeafGrowth, LeafGrowthInput, LeafGrowthOutput};
pub use roots::{RootGrowth, RootGrowthInput};

use uom::{ConstZero, si::f64::Mass};

/// Structural mass and structural nitrogen increments of one tissue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralGrowth {
    pub delta_mstruct: Mass,
    pub delta_nstruct: Mass,
}

impl StructuralGrowth {
    /// No growth.
    pub const NONE: Self = Self {
        delta_mstruct: Mass::ZERO,
        delta_nstruct: Mass::ZERO,
    };

    /// Pairs an mstruct increment with its structural nitrogen.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] if the nitrogen increment is not finite.
    pub(crate) fn from_mstruct(
        kinetics: &GrowthKinetics,
        delta_mstruct: Mass,
    ) -> Result<Self, GrowthError> {
        Ok(Self {
            delta_mstruct,
            delta_nstruct: kinetics.delta_nstruct(delta_mstruct)?,
        })
    }
}
