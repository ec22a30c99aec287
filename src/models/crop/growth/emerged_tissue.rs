use twine_core::Model;
use uom::si::f64::Mass;

use super::{EmergedTissue, GrowthError, GrowthKinetics, StructuralGrowth};

/// Input to [`EmergedTissueGrowth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergedTissueInput {
    /// Tissue geometry, already updated for the current timestep.
    pub tissue: EmergedTissue,
    /// Structural mass at the previous timestep.
    pub previous_mstruct: Mass,
}

impl EmergedTissueInput {
    pub(super) fn growth(
        &self,
        kinetics: &GrowthKinetics,
    ) -> Result<StructuralGrowth, GrowthError> {
        let delta_mstruct =
            kinetics.emerged_tissue_delta_mstruct(&self.tissue, self.previous_mstruct)?;
        StructuralGrowth::from_mstruct(kinetics, delta_mstruct)
    }
}

/// Mass growth of an emerged lamina, sheath or internode.
#[derive(Debug, Clone, Copy)]
pub struct EmergedTissueGrowth {
    kinetics: GrowthKinetics,
}

impl EmergedTissueGrowth {
    #[must_use]
    pub fn new(kinetics: GrowthKinetics) -> Self {
        Self { kinetics }
    }
}

impl Model for EmergedTissueGrowth {
    type Input = EmergedTissueInput;
    type Output = StructuralGrowth;
    type Error = GrowthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.growth(&self.kinetics)
    }
}
