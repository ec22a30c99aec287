//! # Twine Growthwheat
//!
//! Wheat organ mass-growth models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given organ geometry and metabolite pools for one timestep, the models
//! return structural mass increments for enclosed leaf and internode
//! segments, emerged tissues and roots, along with the metabolite export and
//! consumption that go with them.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in the model's internal `core` module
//! and moves to [`support`] only once it is useful across models.

pub mod models;
pub mod support;
