//! Presentation Module
//!
//! Applies a classified tier to a UI surface.

pub mod applier;
pub mod surface;

pub use applier::*;
pub use surface::*;
