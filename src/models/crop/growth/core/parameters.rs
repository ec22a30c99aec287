//! Named constants of the growth-kinetics equations.
//!
//! Values are stored as plain numbers in the units the model is calibrated
//! in (g, m, s, µmol, g·mol⁻¹) so a parameter file reads the same way the
//! calibration papers do. Accessors return [`uom`] quantities.

use uom::si::{
    f64::{MolarMass, Time},
    molar_mass::gram_per_mole,
    time::second,
};

use crate::support::units::{
    SpecificAmount, SpecificAmountRate, micromoles_per_gram, micromoles_per_gram_second,
};

use super::{GrowthParametersError, Organ};

/// Leaf pseudo-age at which the automate curve leaves its initial value (s).
const LEAF_TB: f64 = 0.0;
/// Leaf pseudo-age of maximal mass growth rate (s).
const LEAF_TM: f64 = 209.0 * 3600.0;
/// Leaf pseudo-age at the end of enclosed growth (s).
const LEAF_TE: f64 = 271.0 * 3600.0;
/// Enclosed leaf mass at `tb`, as a fraction of its final mass.
const FITTED_L0: f64 = 0.0104;

const INTERNODE_TB: f64 = 0.0;
const INTERNODE_TM: f64 = 167.0 * 3600.0;
const INTERNODE_TE: f64 = 210.0 * 3600.0;
/// Ratio of final to initial enclosed internode mass.
const SCALING_FACTOR_INT: f64 = 165.0;

/// All constants used by the growth-kinetics equations.
///
/// `Default` yields the reference calibration. Validate a parameter set by
/// building a [`GrowthKinetics`](super::GrowthKinetics) from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthParameters {
    pub allometry: Allometry,
    pub leaf_curve: AutomateCurve,
    pub internode_curve: AutomateCurve,
    pub stoichiometry: Stoichiometry,
    pub roots: RootKinetics,
}

/// Mass-length allometry of enclosed segments during exponential-like growth.
///
/// Enclosed dry mass follows `alpha · L^beta`, so its increment over a
/// length increment `ΔL` is `alpha · beta · L^(beta - 1) · ΔL`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allometry {
    /// Allometric coefficient (g of dry mass · m^-beta).
    pub alpha: f64,
    /// Allometric exponent (dimensionless).
    pub beta: f64,
    /// Structural share of dry mass (g mstruct · g⁻¹ dry mass).
    pub ratio_mstruct_dm: f64,
    /// Enclosed internode to enclosed leaf mass ratio at equal length.
    pub ratio_enclosed_leaf_internode: f64,
}

impl Default for Allometry {
    fn default() -> Self {
        Self {
            alpha: 3.8,
            beta: 2.28,
            ratio_mstruct_dm: 0.8,
            ratio_enclosed_leaf_internode: 0.5,
        }
    }
}

/// Bounded sigmoid driving enclosed mass after the reference event.
///
/// Ages are pseudo-ages in seconds and must satisfy `tb < tm < te`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutomateCurve {
    /// Pseudo-age where growth starts (s).
    pub tb: f64,
    /// Pseudo-age of the inflection point (s).
    pub tm: f64,
    /// Pseudo-age where the enclosed mass reaches capacity (s).
    pub te: f64,
    /// Fraction of capacity held up to `tb`.
    pub initial_fraction: f64,
    /// Fitted correction added to the sigmoid fraction.
    pub offset: f64,
}

impl AutomateCurve {
    /// Reference curve for enclosed leaves, starting at previous leaf emergence.
    #[must_use]
    pub fn leaf() -> Self {
        Self {
            tb: LEAF_TB,
            tm: LEAF_TM,
            te: LEAF_TE,
            initial_fraction: FITTED_L0,
            offset: FITTED_L0,
        }
    }

    /// Reference curve for enclosed internodes, starting at previous leaf ligulation.
    #[must_use]
    pub fn internode() -> Self {
        Self {
            tb: INTERNODE_TB,
            tm: INTERNODE_TM,
            te: INTERNODE_TE,
            initial_fraction: 1.0 / SCALING_FACTOR_INT,
            offset: 1.0 / SCALING_FACTOR_INT,
        }
    }

    /// Start of growth as a [`Time`].
    #[must_use]
    pub fn start(&self) -> Time {
        Time::new::<second>(self.tb)
    }

    /// End of growth as a [`Time`].
    #[must_use]
    pub fn end(&self) -> Time {
        Time::new::<second>(self.te)
    }

    fn validate(&self, organ: Organ) -> Result<(), GrowthParametersError> {
        let Self {
            tb,
            tm,
            te,
            initial_fraction,
            offset,
        } = *self;

        finite("tb", tb)?;
        finite("tm", tm)?;
        finite("te", te)?;
        finite("initial_fraction", initial_fraction)?;
        finite("offset", offset)?;

        if !(tb < tm && tm < te) {
            return Err(GrowthParametersError::CurveAges { organ, tb, tm, te });
        }
        if !(0.0..=1.0).contains(&initial_fraction) {
            return Err(GrowthParametersError::InitialFraction {
                organ,
                value: initial_fraction,
            });
        }
        Ok(())
    }
}

/// Carbon and nitrogen stoichiometry of structural growth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stoichiometry {
    /// Structural nitrogen per unit mstruct (g N · g⁻¹).
    pub ratio_amino_acids_mstruct: f64,
    /// Structural carbon per unit mstruct (g C · g⁻¹).
    pub ratio_sucrose_mstruct: f64,
    /// Molar mass of carbon (g · mol⁻¹).
    pub c_molar_mass: f64,
    /// Molar mass of nitrogen (g · mol⁻¹).
    pub n_molar_mass: f64,
    /// Carbon atoms per amino acid molecule, on average.
    pub amino_acids_c_ratio: f64,
    /// Nitrogen atoms per amino acid molecule, on average.
    pub amino_acids_n_ratio: f64,
}

impl Stoichiometry {
    #[must_use]
    pub fn carbon_molar_mass(&self) -> MolarMass {
        MolarMass::new::<gram_per_mole>(self.c_molar_mass)
    }

    #[must_use]
    pub fn nitrogen_molar_mass(&self) -> MolarMass {
        MolarMass::new::<gram_per_mole>(self.n_molar_mass)
    }
}

impl Default for Stoichiometry {
    fn default() -> Self {
        Self {
            ratio_amino_acids_mstruct: 0.005,
            ratio_sucrose_mstruct: 0.384,
            c_molar_mass: 12.0,
            n_molar_mass: 14.0,
            amino_acids_c_ratio: 4.15,
            amino_acids_n_ratio: 1.25,
        }
    }
}

/// Substrate-limited root growth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootKinetics {
    /// Maximal carbon incorporation rate (µmol C · g⁻¹ mstruct · s⁻¹).
    pub vmax: f64,
    /// Sucrose concentration at half the maximal rate (µmol C · g⁻¹ mstruct).
    pub km: f64,
    /// Carbon per unit root mstruct (g C · g⁻¹).
    pub ratio_c_mstruct: f64,
    /// Nitrogen per unit root mstruct (g N · g⁻¹).
    pub ratio_n_mstruct: f64,
}

impl RootKinetics {
    #[must_use]
    pub fn max_rate(&self) -> SpecificAmountRate {
        micromoles_per_gram_second(self.vmax)
    }

    #[must_use]
    pub fn affinity(&self) -> SpecificAmount {
        micromoles_per_gram(self.km)
    }
}

impl Default for RootKinetics {
    fn default() -> Self {
        Self {
            vmax: 0.015,
            km: 1250.0,
            ratio_c_mstruct: 0.444,
            ratio_n_mstruct: 0.005,
        }
    }
}

impl Default for GrowthParameters {
    fn default() -> Self {
        Self {
            allometry: Allometry::default(),
            leaf_curve: AutomateCurve::leaf(),
            internode_curve: AutomateCurve::internode(),
            stoichiometry: Stoichiometry::default(),
            roots: RootKinetics::default(),
        }
    }
}

impl GrowthParameters {
    /// Checks the parameter set for values the equations cannot use.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthParametersError`] naming the first offending value.
    pub(super) fn validate(&self) -> Result<(), GrowthParametersError> {
        let Allometry {
            alpha,
            beta,
            ratio_mstruct_dm,
            ratio_enclosed_leaf_internode,
        } = self.allometry;
        positive("alpha", alpha)?;
        positive("beta", beta)?;
        positive("ratio_mstruct_dm", ratio_mstruct_dm)?;
        positive("ratio_enclosed_leaf_internode", ratio_enclosed_leaf_internode)?;

        self.leaf_curve.validate(Organ::Leaf)?;
        self.internode_curve.validate(Organ::Internode)?;

        let Stoichiometry {
            ratio_amino_acids_mstruct,
            ratio_sucrose_mstruct,
            c_molar_mass,
            n_molar_mass,
            amino_acids_c_ratio,
            amino_acids_n_ratio,
        } = self.stoichiometry;
        positive("ratio_amino_acids_mstruct", ratio_amino_acids_mstruct)?;
        positive("ratio_sucrose_mstruct", ratio_sucrose_mstruct)?;
        positive("c_molar_mass", c_molar_mass)?;
        positive("n_molar_mass", n_molar_mass)?;
        positive("amino_acids_c_ratio", amino_acids_c_ratio)?;
        positive("amino_acids_n_ratio", amino_acids_n_ratio)?;

        let RootKinetics {
            vmax,
            km,
            ratio_c_mstruct,
            ratio_n_mstruct,
        } = self.roots;
        positive("vmax", vmax)?;
        positive("km", km)?;
        positive("ratio_c_mstruct", ratio_c_mstruct)?;
        positive("ratio_n_mstruct", ratio_n_mstruct)?;

        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), GrowthParametersError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GrowthParametersError::NotFinite { name })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), GrowthParametersError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GrowthParametersError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_calibration_is_valid() {
        assert_eq!(GrowthParameters::default().validate(), Ok(()));
    }

    #[test]
    fn curve_ages_must_be_ordered() {
        let mut params = GrowthParameters::default();
        params.leaf_curve.tm = params.leaf_curve.te + 1.0;

        assert!(matches!(
            params.validate(),
            Err(GrowthParametersError::CurveAges {
                organ: Organ::Leaf,
                ..
            })
        ));
    }

    #[test]
    fn degenerate_curve_is_rejected() {
        let mut params = GrowthParameters::default();
        params.internode_curve.tm = params.internode_curve.te;

        assert!(matches!(
            params.validate(),
            Err(GrowthParametersError::CurveAges {
                organ: Organ::Internode,
                ..
            })
        ));
    }

    #[test]
    fn initial_fraction_must_be_a_fraction() {
        let mut params = GrowthParameters::default();
        params.internode_curve.initial_fraction = 1.5;

        assert_eq!(
            params.validate(),
            Err(GrowthParametersError::InitialFraction {
                organ: Organ::Internode,
                value: 1.5,
            })
        );
    }

    #[test]
    fn kinetic_constants_must_be_positive() {
        let mut params = GrowthParameters::default();
        params.roots.km = 0.0;

        assert_eq!(
            params.validate(),
            Err(GrowthParametersError::NonPositive {
                name: "km",
                value: 0.0,
            })
        );
    }

    #[test]
    fn nan_is_reported_as_not_finite() {
        let mut params = GrowthParameters::default();
        params.stoichiometry.n_molar_mass = f64::NAN;

        assert_eq!(
            params.validate(),
            Err(GrowthParametersError::NotFinite {
                name: "n_molar_mass"
            })
        );
    }

    #[test]
    fn internode_starts_from_reciprocal_scaling_factor() {
        let curve = AutomateCurve::internode();
        assert_eq!(curve.initial_fraction, 1.0 / SCALING_FACTOR_INT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_partial_parameter_file() {
        let json = r#"{
            "allometry": { "alpha": 1.0, "beta": 1.2, "ratio_mstruct_dm": 0.8,
                           "ratio_enclosed_leaf_internode": 0.5 }
        }"#;

        let params: GrowthParameters = serde_json::from_str(json).unwrap();

        assert_eq!(params.allometry.alpha, 1.0);
        assert_eq!(params.allometry.beta, 1.2);
        assert_eq!(params.roots, RootKinetics::default());
        assert_eq!(params.validate(), Ok(()));
    }
}
