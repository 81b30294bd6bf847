//! Experience Classifier
//!
//! Decides which experience tier to serve from two independent signals:
//! the declared device identity (user agent) and the measured viewport
//! width. A confident user-agent match wins outright; otherwise the width
//! decides, with a fallback policy when the width is unavailable.

use crate::error::Result;
use crate::experience::signature::{DeviceSignal, SignatureCatalog};
use crate::experience::tier::{Tier, ViewportThresholds};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Classification Result
// =============================================================================

/// Which rule produced the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBasis {
    /// Known phone or tablet user agent
    UserAgent,
    /// Generic mobile user agent, no width to refine it
    MobileWithoutWidth,
    /// No usable signal at all
    NoSignal,
    /// Generic mobile user agent on a viewport wider than any tablet
    WideMobile,
    /// Width thresholds
    ViewportWidth,
}

impl std::fmt::Display for DecisionBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionBasis::UserAgent => write!(f, "user_agent"),
            DecisionBasis::MobileWithoutWidth => write!(f, "mobile_without_width"),
            DecisionBasis::NoSignal => write!(f, "no_signal"),
            DecisionBasis::WideMobile => write!(f, "wide_mobile"),
            DecisionBasis::ViewportWidth => write!(f, "viewport_width"),
        }
    }
}

/// Complete classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Tier to serve
    pub tier: Tier,
    /// What the user agent indicated
    pub signal: DeviceSignal,
    /// Rule that decided the tier
    pub basis: DecisionBasis,
    /// Width consulted, if the decision looked at it
    pub viewport_width: Option<u32>,
}

// =============================================================================
// Classifier Configuration
// =============================================================================

/// Configuration for the experience classifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Width thresholds between tiers
    pub viewport: ViewportThresholds,
    /// User-agent signature sets
    pub signatures: SignatureCatalog,
}

impl ClassifierConfig {
    /// Validate thresholds and signatures
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()?;
        self.signatures.validate()
    }
}

// =============================================================================
// Experience Classifier
// =============================================================================

/// Classifies browsing clients into experience tiers
#[derive(Debug, Clone)]
pub struct ExperienceClassifier {
    config: ClassifierConfig,
}

impl ExperienceClassifier {
    /// Create a new classifier with default config
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    /// Create a classifier with custom config
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Pick the tier for a client
    pub fn classify(&self, user_agent: Option<&str>, viewport_width: Option<u32>) -> Tier {
        self.classify_detailed(user_agent, viewport_width).tier
    }

    /// Pick the tier for a client and report how it was decided
    pub fn classify_detailed(
        &self,
        user_agent: Option<&str>,
        viewport_width: Option<u32>,
    ) -> Classification {
        let signal = self.config.signatures.detect(user_agent);
        let classification = self.resolve(signal, viewport_width);

        debug!(
            tier = %classification.tier,
            signal = %signal,
            basis = %classification.basis,
            width = ?viewport_width,
            "Classified client"
        );

        classification
    }

    fn resolve(&self, signal: DeviceSignal, viewport_width: Option<u32>) -> Classification {
        let decided = |tier: Tier, basis: DecisionBasis, width: Option<u32>| Classification {
            tier,
            signal,
            basis,
            viewport_width: width,
        };

        if signal.is_confident() {
            let tier = if signal == DeviceSignal::Phone {
                Tier::Phone
            } else {
                Tier::Tablet
            };
            return decided(tier, DecisionBasis::UserAgent, None);
        }

        let width = match viewport_width {
            Some(width) => width,
            // Without a width, a mobile device gets the larger mobile surface
            None if signal == DeviceSignal::MobileUncertain => {
                return decided(Tier::Tablet, DecisionBasis::MobileWithoutWidth, None)
            }
            None => return decided(Tier::Desktop, DecisionBasis::NoSignal, None),
        };

        // Width only overrides the mobile signal in the "too wide" direction
        if signal == DeviceSignal::MobileUncertain && width > self.config.viewport.tablet_max_width
        {
            return decided(Tier::Tablet, DecisionBasis::WideMobile, Some(width));
        }

        decided(
            self.config.viewport.tier_for_width(width),
            DecisionBasis::ViewportWidth,
            Some(width),
        )
    }
}

impl Default for ExperienceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
