//! Mass of leaf and internode segments enclosed in the pseudostem.

use std::fmt;

use tracing::debug;
use uom::si::{
    f64::{Length, Mass, Time},
    length::meter,
    mass::gram,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::LineicMass,
};

use super::{Allometry, AutomateCurve, automate};

/// Organ growing inside the hidden zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Organ {
    Leaf,
    Internode,
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("leaf"),
            Self::Internode => f.write_str("internode"),
        }
    }
}

/// Enclosed mstruct increment during exponential-like elongation.
///
/// The allometry is fitted on dry mass with lengths in meters, so the result
/// is converted to structural mass with `ratio_mstruct_dm`. Internodes follow
/// the leaf relation scaled by `ratio_enclosed_leaf_internode`.
pub(super) fn delta_exponential(
    allometry: &Allometry,
    organ: Organ,
    length: Constrained<Length, NonNegative>,
    delta_length: Length,
) -> Mass {
    let Allometry {
        alpha,
        beta,
        ratio_mstruct_dm,
        ratio_enclosed_leaf_internode,
    } = *allometry;

    let l = length.into_inner().get::<meter>();
    let dl = delta_length.get::<meter>();
    let leaf = alpha * beta * l.powf(beta - 1.0) * dl * ratio_mstruct_dm;

    Mass::new::<gram>(match organ {
        Organ::Leaf => leaf,
        Organ::Internode => ratio_enclosed_leaf_internode * leaf,
    })
}

/// Enclosed mstruct prescribed by the automate curve.
///
/// The capacity is the mass of a segment spanning the whole pseudostem at its
/// final lineic structural weight.
pub(super) fn target_automate(
    curve: &AutomateCurve,
    pseudo_age: Time,
    pseudostem_length: Constrained<Length, NonNegative>,
    lineic_structural_weight: Constrained<LineicMass, NonNegative>,
) -> Mass {
    let capacity: Mass = pseudostem_length.into_inner() * lineic_structural_weight.into_inner();
    capacity * automate::fraction(curve, pseudo_age)
}

/// Enclosed mstruct increment after the reference event.
///
/// Returns the difference between the curve target and the current mass,
/// which is negative if `mstruct` already exceeds the target.
pub(super) fn delta_automate(
    curve: &AutomateCurve,
    organ: Organ,
    pseudo_age: Time,
    pseudostem_length: Constrained<Length, NonNegative>,
    lineic_structural_weight: Constrained<LineicMass, NonNegative>,
    mstruct: Mass,
) -> Mass {
    let target = target_automate(curve, pseudo_age, pseudostem_length, lineic_structural_weight);
    let delta = target - mstruct;

    if delta.value < 0.0 {
        debug!(
            %organ,
            target_g = target.get::<gram>(),
            mstruct_g = mstruct.get::<gram>(),
            "enclosed mstruct above automate target"
        );
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{hour, second};

    use crate::{
        models::crop::growth::core::test_support::fixture_parameters,
        support::units::grams_per_meter,
    };

    fn meters(value: f64) -> Constrained<Length, NonNegative> {
        NonNegative::new(Length::new::<meter>(value)).unwrap()
    }

    fn lssw(value: f64) -> Constrained<LineicMass, NonNegative> {
        NonNegative::new(grams_per_meter(value)).unwrap()
    }

    #[test]
    fn exponential_leaf_matches_closed_form() {
        let params = fixture_parameters();
        let delta = delta_exponential(
            &params.allometry,
            Organ::Leaf,
            meters(0.01),
            Length::new::<meter>(0.001),
        );

        let expected = 1.0 * 1.2 * 0.01_f64.powf(0.2) * 0.001 * params.allometry.ratio_mstruct_dm;
        assert_relative_eq!(delta.get::<gram>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn exponential_internode_is_scaled_leaf() {
        let params = fixture_parameters();
        let leaf = delta_exponential(
            &params.allometry,
            Organ::Leaf,
            meters(0.05),
            Length::new::<meter>(0.002),
        );
        let internode = delta_exponential(
            &params.allometry,
            Organ::Internode,
            meters(0.05),
            Length::new::<meter>(0.002),
        );

        assert_relative_eq!(
            internode.get::<gram>(),
            params.allometry.ratio_enclosed_leaf_internode * leaf.get::<gram>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn leaf_holds_fitted_fraction_at_start() {
        let params = fixture_parameters();
        let curve = params.leaf_curve;

        let target = target_automate(
            &curve,
            Time::new::<second>(curve.tb),
            meters(0.2),
            lssw(1.5),
        );

        assert_relative_eq!(
            target.get::<gram>(),
            curve.initial_fraction * 0.2 * 1.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn internode_holds_reciprocal_scaling_factor_at_start() {
        let params = fixture_parameters();
        let curve = params.internode_curve;

        let target = target_automate(
            &curve,
            Time::new::<second>(curve.tb - 10.0),
            meters(0.1),
            lssw(4.0),
        );

        assert_relative_eq!(
            target.get::<gram>(),
            curve.initial_fraction * 0.4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mature_segment_reaches_capacity() {
        let params = fixture_parameters();
        let curve = params.leaf_curve;
        let mstruct = Mass::new::<gram>(0.12);

        for age in [curve.te, curve.te + 1.0, curve.te + 1e6] {
            let delta = delta_automate(
                &curve,
                Organ::Leaf,
                Time::new::<second>(age),
                meters(0.2),
                lssw(1.5),
                mstruct,
            );
            assert_relative_eq!((delta + mstruct).get::<gram>(), 0.3, max_relative = 1e-12);
        }
    }

    #[test]
    fn no_jump_approaching_end() {
        let params = fixture_parameters();
        let curve = params.leaf_curve;
        let just_before = target_automate(
            &curve,
            Time::new::<second>(curve.te - 1e-6),
            meters(0.2),
            lssw(1.5),
        );
        let at_end = target_automate(&curve, Time::new::<second>(curve.te), meters(0.2), lssw(1.5));

        assert_relative_eq!(
            just_before.get::<gram>(),
            at_end.get::<gram>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn consistent_state_yields_zero_delta() {
        let params = fixture_parameters();
        let curve = params.internode_curve;
        let age = Time::new::<hour>(0.5 * (curve.tb + curve.te) / 3600.0);

        let target = target_automate(&curve, age, meters(0.15), lssw(3.0));
        let delta = delta_automate(
            &curve,
            Organ::Internode,
            age,
            meters(0.15),
            lssw(3.0),
            target,
        );

        assert_eq!(delta.get::<gram>(), 0.0);
    }

    #[test]
    fn overshoot_is_returned_negative() {
        let params = fixture_parameters();
        let curve = params.leaf_curve;

        let delta = delta_automate(
            &curve,
            Organ::Leaf,
            Time::new::<second>(curve.te),
            meters(0.2),
            lssw(1.5),
            Mass::new::<gram>(0.5),
        );

        assert_relative_eq!(delta.get::<gram>(), -0.2, max_relative = 1e-12);
    }

    #[test]
    fn organ_names() {
        assert_eq!(Organ::Leaf.to_string(), "leaf");
        assert_eq!(Organ::Internode.to_string(), "internode");
    }
}
