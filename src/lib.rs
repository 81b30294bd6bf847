//! Browser Survey - Experience Detection
//!
//! Detects which experience (phone, tablet, or desktop) to serve a browsing
//! client from its user-agent string and viewport width, and applies it to
//! the page as a body class marker and alternate stylesheets.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                           Survey Session                             │
//! │        (load / resize / orientationchange → sample → apply)          │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐  │
//! │  │   Environment    │   │    Experience    │   │   Presentation   │  │
//! │  │ (UA + viewport   │──▶│    Classifier    │──▶│     Applier      │  │
//! │  │  probe)          │   │ (signatures +    │   │ (class marker +  │  │
//! │  │                  │   │  width tiers)    │   │  data-href-*)    │  │
//! │  └──────────────────┘   └──────────────────┘   └────────┬─────────┘  │
//! │                                                         │            │
//! │                                               ┌─────────┴─────────┐  │
//! │                                               │    UI Surface     │  │
//! │                                               └───────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`experience`]: Tiers, user-agent signatures, and the classifier
//! - [`presentation`]: UI surfaces and the presentation applier
//! - [`survey`]: Trigger handling, environment sampling, and replay
//! - [`config`]: YAML configuration
//! - [`error`]: Error types and handling

pub mod config;
pub mod error;
pub mod experience;
pub mod presentation;
pub mod survey;

// Re-export commonly used types
pub use config::SurveyConfig;

pub use error::{Error, Result};

pub use experience::{
    Classification, ClassifierConfig, DecisionBasis, DeviceSignal, ExperienceClassifier,
    SignatureCatalog, SignatureSet, Tier, TierProfile, ViewportThresholds,
};

pub use presentation::{ApplyOutcome, LinkElement, MemoryDocument, PresentationApplier, UiSurface};

pub use survey::{
    replay, Environment, ReplaySummary, StaticEnvironment, SurveyEvent, SurveySession, Trigger,
    TriggerSample, ViewportProbe,
};

/// Classify a client with the built-in signatures and thresholds
pub fn classify(user_agent: Option<&str>, viewport_width: Option<u32>) -> Tier {
    ExperienceClassifier::new().classify(user_agent, viewport_width)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify(Some("Mozilla/5.0 (iPhone)"), Some(2000)), Tier::Phone);
        assert_eq!(classify(Some("Mozilla/5.0 (iPad)"), Some(300)), Tier::Tablet);
        assert_eq!(classify(Some("Android"), Some(1200)), Tier::Tablet);
        assert_eq!(classify(Some("Android"), Some(400)), Tier::Phone);
        assert_eq!(classify(Some("Android"), None), Tier::Tablet);
        assert_eq!(classify(None, None), Tier::Desktop);
    }
}
