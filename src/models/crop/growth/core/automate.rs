//! Bounded sigmoid of enclosed mass against pseudo-age.
//!
//! The curve is the beta growth function of Yin et al. (2003), expressed as
//! a fraction of the enclosed-mass capacity:
//!
//! ```text
//! f(t) = |(1 + (te - t) / (te - tm)) · ((t - tb) / (te - tb))^((te - tb) / (te - tm))| + offset
//! ```
//!
//! The sigmoid is capped at `1`. It is flat at `initial_fraction` up to `tb`,
//! and at `te` and beyond it is exactly `1`.

use uom::si::{f64::Time, time::second};

use super::AutomateCurve;

/// Where a pseudo-age falls on an automate curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Regime {
    /// `t <= tb`: the segment holds its initial fraction.
    Initial,
    /// `tb < t < te`: the sigmoid is active.
    Sigmoid,
    /// `t >= te`: the segment is at capacity.
    Mature,
}

impl Regime {
    pub(super) fn of(curve: &AutomateCurve, pseudo_age: Time) -> Self {
        let t = pseudo_age.get::<second>();
        if t <= curve.tb {
            Self::Initial
        } else if t < curve.te {
            Self::Sigmoid
        } else {
            Self::Mature
        }
    }
}

/// Target enclosed mass as a fraction of capacity, never above `1`.
pub(super) fn fraction(curve: &AutomateCurve, pseudo_age: Time) -> f64 {
    let AutomateCurve {
        tb,
        tm,
        te,
        initial_fraction,
        offset,
    } = *curve;

    match Regime::of(curve, pseudo_age) {
        Regime::Initial => initial_fraction,
        Regime::Mature => 1.0,
        Regime::Sigmoid => {
            let t = pseudo_age.get::<second>();
            let steepness = (te - tb) / (te - tm);
            let progress = ((t - tb) / (te - tb)).clamp(0.0, 1.0);
            let remaining = (te - t).max(0.0) / (te - tm);
            (((1.0 + remaining) * progress.powf(steepness)).abs() + offset).min(1.0)
        }
    }
}
