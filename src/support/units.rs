//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, mass, amount
//! of substance). This module provides the quantities that crop growth models
//! need but [`uom`] doesn't name, along with constructors in the units those
//! models are usually calibrated in.
//!
//! ## Structural weights
//!
//! Organ geometry is turned into structural mass through a weight density,
//! either per unit length (sheaths, internodes) or per unit area (laminae):
//!
//! ```
//! use twine_growthwheat::support::units::{grams_per_meter, grams_per_square_meter};
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Mass},
//!     length::meter,
//!     mass::gram,
//! };
//!
//! let sheath: Mass = grams_per_meter(1.5) * Length::new::<meter>(0.1);
//! assert!((sheath.get::<gram>() - 0.15).abs() < 1e-12);
//!
//! let lamina: Mass = grams_per_square_meter(22.0) * Area::new::<square_meter>(0.002);
//! assert!((lamina.get::<gram>() - 0.044).abs() < 1e-12);
//! ```
//!
//! ## Metabolite concentrations
//!
//! Metabolite pools are tracked in µmol of carbon or nitrogen, so
//! concentrations relative to structural mass are expressed in µmol·g⁻¹
//! ([`SpecificAmount`]) and kinetic rates in µmol·g⁻¹·s⁻¹
//! ([`SpecificAmountRate`]).

mod constructors;
mod quantities;

pub use constructors::{
    grams_per_meter, grams_per_square_meter, micromoles_per_gram, micromoles_per_gram_second,
    to_micromoles_per_gram,
};
pub use quantities::{ArealMass, LineicMass, SpecificAmount, SpecificAmountRate};
