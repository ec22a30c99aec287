use super::{Allometry, AutomateCurve, GrowthKinetics, GrowthParameters, RootKinetics, Stoichiometry};

/// Parameters with round allometry constants and short automate curves.
pub(crate) fn fixture_parameters() -> GrowthParameters {
    GrowthParameters {
        allometry: Allometry {
            alpha: 1.0,
            beta: 1.2,
            ratio_mstruct_dm: 0.8,
            ratio_enclosed_leaf_internode: 0.5,
        },
        leaf_curve: AutomateCurve {
            tb: 0.0,
            tm: 100.0 * 3600.0,
            te: 150.0 * 3600.0,
            initial_fraction: 0.01,
            offset: 0.01,
        },
        internode_curve: AutomateCurve {
            tb: 10.0 * 3600.0,
            tm: 80.0 * 3600.0,
            te: 120.0 * 3600.0,
            initial_fraction: 0.005,
            offset: 0.005,
        },
        stoichiometry: Stoichiometry::default(),
        roots: RootKinetics {
            vmax: 0.015,
            km: 1250.0,
            ratio_c_mstruct: 0.444,
            ratio_n_mstruct: 0.005,
        },
    }
}

pub(crate) fn fixture_kinetics() -> GrowthKinetics {
    GrowthKinetics::new(fixture_parameters()).expect("fixture parameters should be valid")
}
