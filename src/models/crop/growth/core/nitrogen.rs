use uom::si::f64::Mass;

use super::Stoichiometry;

/// Structural nitrogen increment paired with an mstruct increment.
///
/// Applies to hidden-zone and emerged-tissue increments alike.
pub(super) fn delta_nstruct(stoichiometry: &Stoichiometry, delta_mstruct: Mass) -> Mass {
    delta_mstruct * stoichiometry.ratio_amino_acids_mstruct
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::gram;

    #[test]
    fn fixed_share_of_mstruct() {
        let stoichiometry = Stoichiometry::default();

        let delta = delta_nstruct(&stoichiometry, Mass::new::<gram>(2.0));

        assert_relative_eq!(
            delta.get::<gram>(),
            2.0 * stoichiometry.ratio_amino_acids_mstruct,
            max_relative = 1e-12
        );
    }

    #[test]
    fn sign_follows_mstruct() {
        let stoichiometry = Stoichiometry::default();
        assert!(delta_nstruct(&stoichiometry, Mass::new::<gram>(-0.1)).value < 0.0);
        assert_eq!(delta_nstruct(&stoichiometry, Mass::new::<gram>(0.0)).value, 0.0);
    }
}
