//! Metabolites consumed by structural growth.
//!
//! Structural carbon comes from two sources: the carbon skeletons of the
//! amino acids incorporated as structural nitrogen, and sucrose for the rest.
//! The carbon total always splits exactly into those two shares.

use uom::si::f64::{AmountOfSubstance, Mass};

use super::Stoichiometry;

/// Per-tissue increments of one leaf over a timestep.
///
/// Used both for mstruct increments and for the matching Nstruct increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TissueDeltas {
    pub hidden_zone: Mass,
    pub lamina: Mass,
    pub sheath: Mass,
}

impl TissueDeltas {
    #[must_use]
    pub fn total(&self) -> Mass {
        self.hidden_zone + self.lamina + self.sheath
    }
}

/// Carbon consumed by structural growth, split by source (µmol C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SucroseConsumption {
    /// Carbon required by the mstruct increments.
    pub total_carbon: AmountOfSubstance,
    /// Share supplied by the amino acids built into Nstruct.
    pub amino_acids_carbon: AmountOfSubstance,
    /// Share drawn from sucrose.
    pub sucrose_carbon: AmountOfSubstance,
}

/// Amino-acid nitrogen consumed by Nstruct growth (µmol N).
pub(super) fn amino_acids_consumption(
    stoichiometry: &Stoichiometry,
    delta_nstruct: &TissueDeltas,
) -> AmountOfSubstance {
    delta_nstruct.total() / stoichiometry.nitrogen_molar_mass()
}

/// Sucrose carbon consumed by mstruct growth.
///
/// `amino_acids_nitrogen` is the consumption returned by
/// [`amino_acids_consumption`] for the same timestep.
pub(super) fn sucrose_consumption(
    stoichiometry: &Stoichiometry,
    delta_mstruct: &TissueDeltas,
    amino_acids_nitrogen: AmountOfSubstance,
) -> SucroseConsumption {
    let amino_acids = amino_acids_nitrogen / stoichiometry.amino_acids_n_ratio;
    let amino_acids_carbon = amino_acids * stoichiometry.amino_acids_c_ratio;

    let total_carbon = delta_mstruct.total() * stoichiometry.ratio_sucrose_mstruct
        / stoichiometry.carbon_molar_mass();

    SucroseConsumption {
        total_carbon,
        amino_acids_carbon,
        sucrose_carbon: total_carbon - amino_acids_carbon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{amount_of_substance::micromole, mass::gram};

    fn grams(hidden_zone: f64, lamina: f64, sheath: f64) -> TissueDeltas {
        TissueDeltas {
            hidden_zone: Mass::new::<gram>(hidden_zone),
            lamina: Mass::new::<gram>(lamina),
            sheath: Mass::new::<gram>(sheath),
        }
    }

    #[test]
    fn nitrogen_grams_to_micromoles() {
        let stoichiometry = Stoichiometry::default();

        // 0.014 g of N at 14 g/mol is 1000 µmol.
        let consumed = amino_acids_consumption(&stoichiometry, &grams(0.004, 0.006, 0.004));

        assert_relative_eq!(consumed.get::<micromole>(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn carbon_split() {
        let stoichiometry = Stoichiometry::default();

        let consumption = sucrose_consumption(
            &stoichiometry,
            &grams(0.1, 0.2, 0.1),
            AmountOfSubstance::new::<micromole>(125.0),
        );

        // 0.4 g mstruct · 0.384 g C/g / 12 g/mol = 12 800 µmol C.
        assert_relative_eq!(
            consumption.total_carbon.get::<micromole>(),
            12_800.0,
            max_relative = 1e-12
        );
        // 125 µmol N / 1.25 N per AA · 4.15 C per AA = 415 µmol C.
        assert_relative_eq!(
            consumption.amino_acids_carbon.get::<micromole>(),
            415.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            consumption.sucrose_carbon.get::<micromole>(),
            12_385.0,
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn carbon_sources_add_up(
            hidden_zone in -0.01_f64..0.5,
            lamina in -0.01_f64..0.5,
            sheath in -0.01_f64..0.5,
        ) {
            let stoichiometry = Stoichiometry::default();
            let mstruct = grams(hidden_zone, lamina, sheath);
            let nstruct = TissueDeltas {
                hidden_zone: mstruct.hidden_zone * stoichiometry.ratio_amino_acids_mstruct,
                lamina: mstruct.lamina * stoichiometry.ratio_amino_acids_mstruct,
                sheath: mstruct.sheath * stoichiometry.ratio_amino_acids_mstruct,
            };

            let nitrogen = amino_acids_consumption(&stoichiometry, &nstruct);
            let consumption = sucrose_consumption(&stoichiometry, &mstruct, nitrogen);

            let required = (hidden_zone + lamina + sheath) * stoichiometry.ratio_sucrose_mstruct
                / stoichiometry.c_molar_mass
                * 1e6;
            let reconstructed = consumption.sucrose_carbon + consumption.amino_acids_carbon;

            prop_assert!(
                (reconstructed.get::<micromole>() - required).abs() <= 1e-6 * required.abs().max(1.0)
            );
        }
    }
}
