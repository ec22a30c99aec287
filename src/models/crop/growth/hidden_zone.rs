use twine_core::Model;
use uom::si::f64::{Length, Mass, Time};

use crate::support::units::LineicMass;

use super::{GrowthError, GrowthKinetics, Organ, StructuralGrowth};

/// Growth regime of an enclosed segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HiddenZonePhase {
    /// Exponential-like elongation, before the reference event.
    Exponential {
        /// Current segment length.
        length: Length,
        /// Length increment over the timestep.
        delta_length: Length,
    },
    /// Automate growth, after previous leaf emergence (leaves) or ligulation
    /// (internodes).
    Automate {
        /// Time since the reference event.
        pseudo_age: Time,
        pseudostem_length: Length,
        /// Lineic structural weight of the mature sheath (leaves) or internode.
        lineic_structural_weight: LineicMass,
        /// Current enclosed mstruct.
        mstruct: Mass,
    },
}

impl HiddenZonePhase {
    pub(super) fn delta_mstruct(
        &self,
        kinetics: &GrowthKinetics,
        organ: Organ,
    ) -> Result<Mass, GrowthError> {
        match *self {
            Self::Exponential {
                length,
                delta_length,
            } => kinetics.enclosed_delta_mstruct(organ, length, delta_length),
            Self::Automate {
                pseudo_age,
                pseudostem_length,
                lineic_structural_weight,
                mstruct,
            } => kinetics.enclosed_delta_mstruct_automate(
                organ,
                pseudo_age,
                pseudostem_length,
                lineic_structural_weight,
                mstruct,
            ),
        }
    }
}

/// Input to [`HiddenZoneGrowth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenZoneInput {
    pub organ: Organ,
    pub phase: HiddenZonePhase,
}

/// Mass growth of a leaf or internode segment enclosed in the pseudostem.
#[derive(Debug, Clone, Copy)]
pub struct HiddenZoneGrowth {
    kinetics: GrowthKinetics,
}

impl HiddenZoneGrowth {
    #[must_use]
    pub fn new(kinetics: GrowthKinetics) -> Self {
        Self { kinetics }
    }
}

impl Model for HiddenZoneGrowth {
    type Input = HiddenZoneInput;
    type Output = StructuralGrowth;
    type Error = GrowthError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let delta_mstruct = input.phase.delta_mstruct(&self.kinetics, input.organ)?;
        StructuralGrowth::from_mstruct(&self.kinetics, delta_mstruct)
    }
}
