//! Survey Module
//!
//! Trigger handling around the classifier: sampling the client
//! environment, applying results, and replaying recorded triggers.

pub mod environment;
pub mod events;
pub mod replay;
pub mod session;
pub mod trigger;

pub use environment::*;
pub use events::*;
pub use replay::*;
pub use session::*;
pub use trigger::*;
