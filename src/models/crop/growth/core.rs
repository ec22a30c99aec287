//! Mass-growth kinetics of wheat organs.
//!
//! Each computation is a pure function of its inputs and a validated
//! [`GrowthParameters`] set. State persistence across timesteps belongs to the
//! caller, which re-supplies the previous values on every call and adds the
//! returned increments to its own state.
//!
//! Enclosed (hidden-zone) segments grow in two regimes:
//!
//! - **Exponential-like**: mass follows an allometry on segment length.
//! - **Automate**: after the previous leaf emerges (leaves) or ligulates
//!   (internodes), mass follows a bounded sigmoid of pseudo-age up to the mass
//!   of a segment spanning the pseudostem.
//!
//! Emerged tissue mass is read off updated geometry. Nitrogen, export and
//! consumption bookkeeping derive from the mstruct increments. Roots grow on
//! their own sucrose pool with Michaelis-Menten kinetics.

mod automate;
mod consumption;
mod emerged;
mod error;
mod export;
mod hidden_zone;
mod nitrogen;
mod parameters;
mod roots;

#[cfg(test)]
pub(crate) mod test_support;

pub use consumption::{SucroseConsumption, TissueDeltas};
pub use emerged::EmergedTissue;
pub use error::{GrowthError, GrowthParametersError};
pub use hidden_zone::Organ;
pub use parameters::{Allometry, AutomateCurve, GrowthParameters, RootKinetics, Stoichiometry};
pub use roots::RootGrowthOutput;

use tracing::debug;
use uom::si::f64::{AmountOfSubstance, Length, Mass, Time};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::LineicMass,
};

use error::{ensure_finite, ensure_number};

/// Entry point for the growth-kinetics equations.
///
/// Holds a parameter set that passed validation, so every method can rely on
/// ordered curve ages and positive constants. The type is immutable and can
/// be shared freely between threads.
///
/// Methods take raw quantities and reject inputs that would make an
/// equation degenerate (a zero structural mass used as a denominator, a
/// negative length raised to a fractional power) with
/// [`GrowthError::InvalidState`]. Outputs that are not finite are reported as
/// [`GrowthError::NonFinite`] instead of being returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthKinetics {
    params: GrowthParameters,
}

impl GrowthKinetics {
    /// Validates a parameter set and builds the equations around it.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthParametersError`] if a constant is not finite, a
    /// constant that must be positive is not, or an automate curve is not
    /// ordered as `tb < tm < te`.
    pub fn new(params: GrowthParameters) -> Result<Self, GrowthParametersError> {
        params.validate()?;
        debug!(
            leaf_tb = params.leaf_curve.tb,
            leaf_te = params.leaf_curve.te,
            internode_tb = params.internode_curve.tb,
            internode_te = params.internode_curve.te,
            "growth parameters validated"
        );
        Ok(Self { params })
    }

    /// Returns the validated parameter set.
    #[must_use]
    pub fn parameters(&self) -> &GrowthParameters {
        &self.params
    }

    fn curve(&self, organ: Organ) -> &AutomateCurve {
        match organ {
            Organ::Leaf => &self.params.leaf_curve,
            Organ::Internode => &self.params.internode_curve,
        }
    }

    /// Enclosed leaf mstruct increment during exponential-like growth.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] if `leaf_length` is negative or `NaN`, or the
    /// increment is not finite.
    pub fn leaf_enclosed_delta_mstruct(
        &self,
        leaf_length: Length,
        delta_leaf_length: Length,
    ) -> Result<Mass, GrowthError> {
        self.enclosed_delta_mstruct(Organ::Leaf, leaf_length, delta_leaf_length)
    }

    /// Enclosed internode mstruct increment during exponential-like growth.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] if `internode_length` is negative or `NaN`, or
    /// the increment is not finite.
    pub fn internode_enclosed_delta_mstruct(
        &self,
        internode_length: Length,
        delta_internode_length: Length,
    ) -> Result<Mass, GrowthError> {
        self.enclosed_delta_mstruct(Organ::Internode, internode_length, delta_internode_length)
    }

    /// Enclosed mstruct increment of either organ during exponential-like growth.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] if `length` is negative or `NaN`, or the
    /// increment is not finite.
    pub fn enclosed_delta_mstruct(
        &self,
        organ: Organ,
        length: Length,
        delta_length: Length,
    ) -> Result<Mass, GrowthError> {
        let length = NonNegative::new(length).map_err(GrowthError::invalid("enclosed length"))?;
        let delta = hidden_zone::delta_exponential(
            &self.params.allometry,
            organ,
            length,
            delta_length,
        );
        ensure_finite("enclosed delta mstruct", delta.value)?;
        Ok(delta)
    }

    /// Enclosed leaf mstruct increment from previous leaf emergence onwards.
    ///
    /// # Errors
    ///
    /// See [`GrowthKinetics::enclosed_delta_mstruct_automate`].
    pub fn leaf_enclosed_delta_mstruct_post_emergence(
        &self,
        leaf_pseudo_age: Time,
        leaf_pseudostem_length: Length,
        lineic_structural_sheath_weight: LineicMass,
        mstruct: Mass,
    ) -> Result<Mass, GrowthError> {
        self.enclosed_delta_mstruct_automate(
            Organ::Leaf,
            leaf_pseudo_age,
            leaf_pseudostem_length,
            lineic_structural_sheath_weight,
            mstruct,
        )
    }

    /// Enclosed internode mstruct increment from previous leaf ligulation onwards.
    ///
    /// # Errors
    ///
    /// See [`GrowthKinetics::enclosed_delta_mstruct_automate`].
    pub fn internode_enclosed_delta_mstruct_post_ligulation(
        &self,
        internode_pseudo_age: Time,
        internode_pseudostem_length: Length,
        lineic_structural_internode_weight: LineicMass,
        mstruct: Mass,
    ) -> Result<Mass, GrowthError> {
        self.enclosed_delta_mstruct_automate(
            Organ::Internode,
            internode_pseudo_age,
            internode_pseudostem_length,
            lineic_structural_internode_weight,
            mstruct,
        )
    }

    /// Enclosed mstruct increment in the automate regime.
    ///
    /// The increment brings `mstruct` to the curve target and is negative if
    /// `mstruct` is already above it.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] if the pseudo-age is `NaN`, the pseudostem
    /// length or lineic weight is negative or `NaN`, or the increment is not
    /// finite.
    pub fn enclosed_delta_mstruct_automate(
        &self,
        organ: Organ,
        pseudo_age: Time,
        pseudostem_length: Length,
        lineic_structural_weight: LineicMass,
        mstruct: Mass,
    ) -> Result<Mass, GrowthError> {
        let (pseudo_age, pseudostem_length, lineic_structural_weight) =
            automate_inputs(pseudo_age, pseudostem_length, lineic_structural_weight)?;
        let delta = hidden_zone::delta_automate(
            self.curve(organ),
            organ,
            pseudo_age,
            pseudostem_length,
            lineic_structural_weight,
            mstruct,
        );
        ensure_finite("enclosed delta mstruct", delta.value)?;
        Ok(delta)
    }

    /// Enclosed mstruct prescribed by the automate curve at a pseudo-age.
    ///
    /// # Errors
    ///
    /// Returns a [`GrowthError`] on the same inputs as
    /// [`GrowthKinetics::enclosed_delta_mstruct_automate`].
    pub fn enclosed_mstruct_target(
        &self,
        organ: Organ,
        pseudo_age: Time,
        pseudostem_length: Length,
        lineic_structural_weight: LineicMass,
    ) -> Result<Mass, GrowthError> {
        let (pseudo_age, pseudostem_length, lineic_structural_weight) =
            automate_inputs(pseudo_age, pseudostem_length, lineic_structural_weight)?;
        let target = hidden_zone::target_automate(
            self.curve(organ),
            pseudo_age,
            pseudostem_length,
            lineic_structural_weight,
        );
        ensure_finite("enclosed mstruct target", target.value)?;
        Ok(target)
    }

    /// Emerged tissue mstruct increment since the previous timestep.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NonFinite`] if the increment is not finite.
    pub fn emerged_tissue_delta_mstruct(
        &self,
        tissue: &EmergedTissue,
        previous_mstruct: Mass,
    ) -> Result<Mass, GrowthError> {
        let delta = emerged::delta_mstruct(tissue, previous_mstruct);
        ensure_finite("emerged delta mstruct", delta.value)?;
        Ok(delta)
    }

    /// Structural nitrogen increment matching an mstruct increment.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NonFinite`] if the increment is not finite.
    pub fn delta_nstruct(&self, delta_mstruct: Mass) -> Result<Mass, GrowthError> {
        let delta = nitrogen::delta_nstruct(&self.params.stoichiometry, delta_mstruct);
        ensure_finite("delta nstruct", delta.value)?;
        Ok(delta)
    }

    /// Metabolite exported from the hidden zone into emerged tissue.
    ///
    /// `metabolite` is the hidden-zone pool (µmol C for sucrose, µmol N for
    /// amino acids) and `delta_mstruct` the emerged tissue increment.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidState`] if `metabolite` is `NaN` or
    /// `hiddenzone_mstruct` is not strictly positive, or
    /// [`GrowthError::NonFinite`] if the export is not finite.
    pub fn export(
        &self,
        delta_mstruct: Mass,
        metabolite: AmountOfSubstance,
        hiddenzone_mstruct: Mass,
    ) -> Result<AmountOfSubstance, GrowthError> {
        ensure_number("hidden zone metabolite", metabolite.value)?;
        let hiddenzone_mstruct = StrictlyPositive::new(hiddenzone_mstruct)
            .map_err(GrowthError::invalid("hidden zone mstruct"))?;
        let exported = export::export(delta_mstruct, metabolite, hiddenzone_mstruct);
        ensure_finite("export", exported.value)?;
        Ok(exported)
    }

    /// Amino-acid nitrogen consumed by Nstruct growth (µmol N).
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NonFinite`] if the consumption is not finite.
    pub fn amino_acids_consumption(
        &self,
        delta_nstruct: &TissueDeltas,
    ) -> Result<AmountOfSubstance, GrowthError> {
        let consumed =
            consumption::amino_acids_consumption(&self.params.stoichiometry, delta_nstruct);
        ensure_finite("amino acids consumption", consumed.value)?;
        Ok(consumed)
    }

    /// Sucrose carbon consumed by mstruct growth, net of amino-acid carbon.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NonFinite`] if the consumption is not finite.
    pub fn sucrose_consumption(
        &self,
        delta_mstruct: &TissueDeltas,
        amino_acids_nitrogen: AmountOfSubstance,
    ) -> Result<SucroseConsumption, GrowthError> {
        let consumed = consumption::sucrose_consumption(
            &self.params.stoichiometry,
            delta_mstruct,
            amino_acids_nitrogen,
        );
        ensure_finite("sucrose consumption", consumed.sucrose_carbon.value)?;
        Ok(consumed)
    }

    /// Root growth over `delta_t`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidState`] if a metabolite pool is `NaN`,
    /// `mstruct` is not strictly positive or `delta_t` is negative, or [`GrowthError::NonFinite`] if
    /// the growth is not finite.
    pub fn roots_growth(
        &self,
        sucrose: AmountOfSubstance,
        amino_acids: AmountOfSubstance,
        mstruct: Mass,
        delta_t: Time,
    ) -> Result<RootGrowthOutput, GrowthError> {
        ensure_number("root sucrose", sucrose.value)?;
        ensure_number("root amino acids", amino_acids.value)?;
        let mstruct =
            StrictlyPositive::new(mstruct).map_err(GrowthError::invalid("root mstruct"))?;
        let delta_t = NonNegative::new(delta_t).map_err(GrowthError::invalid("delta_t"))?;

        let output = roots::growth(
            &self.params.roots,
            &self.params.stoichiometry,
            sucrose,
            amino_acids,
            mstruct,
            delta_t,
        );
        ensure_finite("root mstruct growth", output.mstruct_growth.value)?;
        ensure_finite("root nitrogen growth", output.nstruct_n_growth.value)?;
        Ok(output)
    }
}

type AutomateInputs = (
    Time,
    Constrained<Length, NonNegative>,
    Constrained<LineicMass, NonNegative>,
);

fn automate_inputs(
    pseudo_age: Time,
    pseudostem_length: Length,
    lineic_structural_weight: LineicMass,
) -> Result<AutomateInputs, GrowthError> {
    ensure_number("pseudo age", pseudo_age.value)?;
    let pseudostem_length =
        NonNegative::new(pseudostem_length).map_err(GrowthError::invalid("pseudostem length"))?;
    let lineic_structural_weight = NonNegative::new(lineic_structural_weight)
        .map_err(GrowthError::invalid("lineic structural weight"))?;
    Ok((pseudo_age, pseudostem_length, lineic_structural_weight))
}
