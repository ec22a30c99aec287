//! Substrate-limited root growth.

use tracing::trace;
use uom::{
    ConstZero,
    si::{
        amount_of_substance::micromole,
        f64::{AmountOfSubstance, Mass, Time},
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::SpecificAmount,
};

use super::{RootKinetics, Stoichiometry};

/// Root growth integrated over one timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootGrowthOutput {
    /// Carbon incorporated into structural mass (µmol C).
    pub mstruct_c_growth: AmountOfSubstance,
    /// Structural dry mass growth.
    pub mstruct_growth: Mass,
    /// Structural nitrogen mass growth, before the amino-acid cap.
    pub nstruct_growth: Mass,
    /// Nitrogen incorporated into Nstruct, capped by the amino-acid pool (µmol N).
    pub nstruct_n_growth: AmountOfSubstance,
}

/// Michaelis-Menten root growth on sucrose concentration.
///
/// The rate is per unit root mstruct, so growth scales with the current mass.
/// Neither pool may be `NaN`: the concentration floor and the nitrogen cap
/// would both discard it.
pub(super) fn growth(
    kinetics: &RootKinetics,
    stoichiometry: &Stoichiometry,
    sucrose: AmountOfSubstance,
    amino_acids: AmountOfSubstance,
    mstruct: Constrained<Mass, StrictlyPositive>,
    delta_t: Constrained<Time, NonNegative>,
) -> RootGrowthOutput {
    let mstruct = mstruct.into_inner();
    let concentration: SpecificAmount = (sucrose / mstruct).max(SpecificAmount::ZERO);

    let mstruct_c_growth: AmountOfSubstance = concentration * kinetics.max_rate()
        / (concentration + kinetics.affinity())
        * delta_t.into_inner()
        * mstruct;
    let mstruct_growth: Mass =
        mstruct_c_growth * stoichiometry.carbon_molar_mass() / kinetics.ratio_c_mstruct;
    let nstruct_growth = mstruct_growth * kinetics.ratio_n_mstruct;

    let nitrogen_demand: AmountOfSubstance = nstruct_growth / stoichiometry.nitrogen_molar_mass();
    if nitrogen_demand > amino_acids {
        trace!(
            demand_umol = nitrogen_demand.get::<micromole>(),
            available_umol = amino_acids.get::<micromole>(),
            "root nitrogen growth limited by amino acids"
        );
    }

    RootGrowthOutput {
        mstruct_c_growth,
        mstruct_growth,
        nstruct_growth,
        nstruct_n_growth: nitrogen_demand.min(amino_acids),
    }
}
