use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Organ;

/// Errors found while validating a [`GrowthParameters`](super::GrowthParameters) set.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GrowthParametersError {
    /// A parameter is `NaN` or infinite.
    #[error("parameter `{name}` is not finite")]
    NotFinite { name: &'static str },

    /// A constant that scales or divides growth is zero or negative.
    #[error("parameter `{name}` must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The automate curve ages are not ordered as `tb < tm < te`.
    #[error("{organ} curve ages must satisfy tb < tm < te: tb={tb}, tm={tm}, te={te}")]
    CurveAges {
        organ: Organ,
        tb: f64,
        tm: f64,
        te: f64,
    },

    /// The mass fraction held before `tb` is outside `[0, 1]`.
    #[error("{organ} initial fraction must lie in [0, 1], got {value}")]
    InitialFraction { organ: Organ, value: f64 },
}

/// Errors returned by a single growth computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GrowthError {
    /// An input violates a precondition of the equations.
    ///
    /// For example, a zero structural mass used as a concentration denominator.
    #[error("invalid state: {quantity}")]
    InvalidState {
        quantity: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Two inputs describing the same quantity disagree.
    #[error("conflicting values for {quantity}")]
    Mismatch { quantity: &'static str },

    /// The computation produced `NaN` or an infinite value.
    #[error("computed {quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

impl GrowthError {
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidState { quantity, source }
    }
}

/// Rejects an input that is `NaN`.
///
/// For inputs whose sign is meaningful (a depleted pool may be negative) but
/// which would otherwise be dropped by a `min`/`max` clamp.
pub(super) fn ensure_number(quantity: &'static str, value: f64) -> Result<(), GrowthError> {
    if value.is_nan() {
        Err(GrowthError::InvalidState {
            quantity,
            source: ConstraintError::NotANumber,
        })
    } else {
        Ok(())
    }
}

/// Rejects a computed value that is `NaN` or infinite.
pub(super) fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), GrowthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GrowthError::NonFinite { quantity })
    }
}
