//! Structural mass of emerged laminae, sheaths and internodes.

use uom::si::f64::{Area, Length, Mass};

use crate::support::units::{ArealMass, LineicMass};

/// Geometry of an emerged tissue together with its structural weight.
///
/// Geometry is the value already updated by the geometry model for the
/// current timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmergedTissue {
    /// Lamina area and structural specific weight (g·m⁻²).
    Lamina {
        area: Area,
        structural_specific_weight: ArealMass,
    },
    /// Sheath length and lineic structural weight (g·m⁻¹).
    Sheath {
        length: Length,
        lineic_structural_weight: LineicMass,
    },
    /// Internode length and lineic structural weight (g·m⁻¹).
    Internode {
        length: Length,
        lineic_structural_weight: LineicMass,
    },
}

impl EmergedTissue {
    /// Structural mass implied by the current geometry.
    #[must_use]
    pub fn structural_mass(&self) -> Mass {
        match *self {
            Self::Lamina {
                area,
                structural_specific_weight,
            } => structural_specific_weight * area,
            Self::Sheath {
                length,
                lineic_structural_weight,
            }
            | Self::Internode {
                length,
                lineic_structural_weight,
            } => lineic_structural_weight * length,
        }
    }
}

/// Increment from the previous mstruct to the mass implied by geometry.
///
/// A geometry that shrinks gives a negative increment.
pub(super) fn delta_mstruct(tissue: &EmergedTissue, previous_mstruct: Mass) -> Mass {
    tissue.structural_mass() - previous_mstruct
}
