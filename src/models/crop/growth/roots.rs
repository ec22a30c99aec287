use twine_core::Model;
use uom::si::f64::{AmountOfSubstance, Mass, Time};

use super::{GrowthError, GrowthKinetics, RootGrowthOutput};

/// Input to [`RootGrowth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootGrowthInput {
    /// Sucrose in the roots (µmol C).
    pub sucrose: AmountOfSubstance,
    /// Amino acids in the roots (µmol N).
    pub amino_acids: AmountOfSubstance,
    /// Root structural mass, strictly positive.
    pub mstruct: Mass,
    /// Timestep duration.
    pub delta_t: Time,
}

/// Sucrose-limited root growth over one timestep.
#[derive(Debug, Clone, Copy)]
pub struct RootGrowth {
    kinetics: GrowthKinetics,
}

impl RootGrowth {
    #[must_use]
    pub fn new(kinetics: GrowthKinetics) -> Self {
        Self { kinetics }
    }
}

impl Model for RootGrowth {
    type Input = RootGrowthInput;
    type Output = RootGrowthOutput;
    type Error = GrowthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.kinetics.roots_growth(
            input.sucrose,
            input.amino_acids,
            input.mstruct,
            input.delta_t,
        )
    }
}
