//! Crop growth models.
//!
//! This module contains models for the growth of crop organs, driven by
//! geometry and metabolite pools supplied by companion models.

pub mod growth;
