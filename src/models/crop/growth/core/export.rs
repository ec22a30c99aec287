use uom::{
    ConstZero,
    si::f64::{AmountOfSubstance, Mass},
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::SpecificAmount,
};

/// Metabolite moved from the hidden zone into newly emerged tissue.
///
/// The emerged mstruct increment carries the hidden-zone concentration with
/// it. Negative concentrations count as zero. A shrinking emerged tissue
/// (negative increment) exports nothing: no transfer back into the hidden
/// zone is modeled.
///
/// `metabolite` must not be `NaN`, which the clamps would silently drop.
pub(super) fn export(
    delta_mstruct: Mass,
    metabolite: AmountOfSubstance,
    hiddenzone_mstruct: Constrained<Mass, StrictlyPositive>,
) -> AmountOfSubstance {
    let concentration: SpecificAmount = metabolite / hiddenzone_mstruct.into_inner();
    (delta_mstruct * concentration.max(SpecificAmount::ZERO)).max(AmountOfSubstance::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{amount_of_substance::micromole, mass::gram};

    fn hiddenzone(grams: f64) -> Constrained<Mass, StrictlyPositive> {
        StrictlyPositive::new(Mass::new::<gram>(grams)).unwrap()
    }

    #[test]
    fn proportional_to_concentration() {
        let exported = export(
            Mass::new::<gram>(0.01),
            AmountOfSubstance::new::<micromole>(500.0),
            hiddenzone(0.05),
        );

        assert_relative_eq!(exported.get::<micromole>(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn depleted_pool_exports_nothing() {
        let exported = export(
            Mass::new::<gram>(0.01),
            AmountOfSubstance::new::<micromole>(-20.0),
            hiddenzone(0.05),
        );

        assert_eq!(exported.get::<micromole>(), 0.0);
    }

    #[test]
    fn shrinking_tissue_exports_nothing() {
        let exported = export(
            Mass::new::<gram>(-0.004),
            AmountOfSubstance::new::<micromole>(500.0),
            hiddenzone(0.05),
        );

        assert_eq!(exported.get::<micromole>(), 0.0);
    }
}
