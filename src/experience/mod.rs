//! Experience Module
//!
//! Experience tiers, user-agent signatures, and the classifier that
//! combines them with viewport width.

pub mod classifier;
pub mod signature;
pub mod tier;

pub use classifier::*;
pub use signature::*;
pub use tier::*;
