//! One leaf's growth bookkeeping over a timestep.
//!
//! The hidden zone feeds the emerged lamina and sheath: every gram of
//! emerged mstruct carries the hidden-zone metabolite concentrations with it,
//! and the structural growth of all three tissues is paid for from the
//! hidden-zone sucrose and amino-acid pools.

use twine_core::Model;
use uom::{
    ConstZero,
    si::f64::{AmountOfSubstance, Mass},
};

use super::{
    EmergedTissueInput, GrowthError, GrowthKinetics, HiddenZonePhase, Organ, StructuralGrowth,
    SucroseConsumption, TissueDeltas,
};

/// Input to [`LeafGrowth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafGrowthInput {
    /// Growth regime of the enclosed part of the leaf.
    pub hidden_zone: HiddenZonePhase,
    /// Hidden-zone structural mass used for metabolite concentrations.
    ///
    /// Must be strictly positive when an emerged tissue is present. In the
    /// automate phase it must equal the phase's `mstruct`, otherwise the call
    /// fails with [`GrowthError::Mismatch`].
    pub hidden_zone_mstruct: Mass,
    /// Hidden-zone sucrose (µmol C).
    pub hidden_zone_sucrose: AmountOfSubstance,
    /// Hidden-zone amino acids (µmol N).
    pub hidden_zone_amino_acids: AmountOfSubstance,
    /// Emerged lamina, if the leaf has emerged.
    pub lamina: Option<EmergedTissueInput>,
    /// Emerged sheath, if any.
    pub sheath: Option<EmergedTissueInput>,
}

/// Per-tissue growth, export and consumption of one leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafGrowthOutput {
    pub hidden_zone: StructuralGrowth,
    pub lamina: StructuralGrowth,
    pub sheath: StructuralGrowth,
    /// Sucrose moved into emerged tissue (µmol C).
    pub export_sucrose: AmountOfSubstance,
    /// Amino acids moved into emerged tissue (µmol N).
    pub export_amino_acids: AmountOfSubstance,
    /// Amino acids consumed by Nstruct growth (µmol N).
    pub amino_acids_consumption: AmountOfSubstance,
    /// Carbon consumed by mstruct growth.
    pub sucrose_consumption: SucroseConsumption,
}

/// Growth of a leaf's hidden zone, lamina and sheath.
#[derive(Debug, Clone, Copy)]
pub struct LeafGrowth {
    kinetics: GrowthKinetics,
}

impl LeafGrowth {
    #[must_use]
    pub fn new(kinetics: GrowthKinetics) -> Self {
        Self { kinetics }
    }

    fn emerged(
        &self,
        tissue: Option<&EmergedTissueInput>,
        input: &LeafGrowthInput,
    ) -> Result<(StructuralGrowth, AmountOfSubstance, AmountOfSubstance), GrowthError> {
        let Some(tissue) = tissue else {
            return Ok((
                StructuralGrowth::NONE,
                AmountOfSubstance::ZERO,
                AmountOfSubstance::ZERO,
            ));
        };

        let growth = tissue.growth(&self.kinetics)?;
        let sucrose = self.kinetics.export(
            growth.delta_mstruct,
            input.hidden_zone_sucrose,
            input.hidden_zone_mstruct,
        )?;
        let amino_acids = self.kinetics.export(
            growth.delta_mstruct,
            input.hidden_zone_amino_acids,
            input.hidden_zone_mstruct,
        )?;
        Ok((growth, sucrose, amino_acids))
    }
}

impl Model for LeafGrowth {
    type Input = LeafGrowthInput;
    type Output = LeafGrowthOutput;
    type Error = GrowthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        if matches!(
            input.hidden_zone,
            HiddenZonePhase::Automate { mstruct, .. } if mstruct != input.hidden_zone_mstruct
        ) {
            return Err(GrowthError::Mismatch {
                quantity: "hidden zone mstruct",
            });
        }

        let hidden_zone = StructuralGrowth::from_mstruct(
            &self.kinetics,
            input.hidden_zone.delta_mstruct(&self.kinetics, Organ::Leaf)?,
        )?;
        let (lamina, lamina_sucrose, lamina_amino_acids) =
            self.emerged(input.lamina.as_ref(), input)?;
        let (sheath, sheath_sucrose, sheath_amino_acids) =
            self.emerged(input.sheath.as_ref(), input)?;

        let delta_nstruct = TissueDeltas {
            hidden_zone: hidden_zone.delta_nstruct,
            lamina: lamina.delta_nstruct,
            sheath: sheath.delta_nstruct,
        };
        let delta_mstruct = TissueDeltas {
            hidden_zone: hidden_zone.delta_mstruct,
            lamina: lamina.delta_mstruct,
            sheath: sheath.delta_mstruct,
        };
        let amino_acids_consumption = self.kinetics.amino_acids_consumption(&delta_nstruct)?;
        let sucrose_consumption = self
            .kinetics
            .sucrose_consumption(&delta_mstruct, amino_acids_consumption)?;

        Ok(LeafGrowthOutput {
            hidden_zone,
            lamina,
            sheath,
            export_sucrose: lamina_sucrose + sheath_sucrose,
            export_amino_acids: lamina_amino_acids + sheath_amino_acids,
            amino_acids_consumption,
            sucrose_consumption,
        })
    }
}
