//! User-Agent Signatures
//!
//! Identifies a device family from its user-agent string using small sets
//! of known substrings, evaluated phone first, then tablet, then generic
//! mobile.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Signature Set
// =============================================================================

/// A set of case-insensitive substring patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SignatureSet {
    /// Patterns as configured
    patterns: Vec<String>,
    /// Lowercased copies used for matching
    folded: Vec<String>,
}

impl SignatureSet {
    /// Create a set from patterns
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let folded = patterns.iter().map(|p| p.to_lowercase()).collect();
        Self { patterns, folded }
    }

    /// Patterns as configured
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check if a user-agent string matches any pattern
    pub fn matches(&self, user_agent: &str) -> bool {
        self.matches_folded(&user_agent.to_lowercase())
    }

    /// Match against an already lowercased user-agent string
    fn matches_folded(&self, user_agent: &str) -> bool {
        self.folded.iter().any(|p| user_agent.contains(p.as_str()))
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::Configuration(format!(
                "{} signature set contains an empty pattern",
                name
            )));
        }
        Ok(())
    }
}

impl From<Vec<String>> for SignatureSet {
    fn from(patterns: Vec<String>) -> Self {
        Self::new(patterns)
    }
}

impl From<SignatureSet> for Vec<String> {
    fn from(set: SignatureSet) -> Self {
        set.patterns
    }
}

// =============================================================================
// Device Signal
// =============================================================================

/// What the user-agent string says about the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceSignal {
    /// Known phone
    Phone,
    /// Known tablet
    Tablet,
    /// Some mobile device, type undetermined
    MobileUncertain,
    /// No user agent, or nothing matched
    Unrecognized,
}

impl DeviceSignal {
    /// Check if the signal settles the tier on its own
    pub fn is_confident(&self) -> bool {
        matches!(self, DeviceSignal::Phone | DeviceSignal::Tablet)
    }
}

impl std::fmt::Display for DeviceSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceSignal::Phone => write!(f, "phone"),
            DeviceSignal::Tablet => write!(f, "tablet"),
            DeviceSignal::MobileUncertain => write!(f, "mobile_uncertain"),
            DeviceSignal::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

// =============================================================================
// Signature Catalog
// =============================================================================

/// The three signature sets, in priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignatureCatalog {
    /// Known phones
    pub phone: SignatureSet,
    /// Known tablets
    pub tablet: SignatureSet,
    /// Mobile platforms shipping on both phones and tablets
    pub generic_mobile: SignatureSet,
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self {
            phone: SignatureSet::new(["iPhone", "iPod", "BlackBerry"]),
            tablet: SignatureSet::new(["iPad", "Kindle", "Silk", "PlayBook"]),
            generic_mobile: SignatureSet::new(["Android"]),
        }
    }
}

impl SignatureCatalog {
    /// Detect the device signal for an optional user-agent string
    pub fn detect(&self, user_agent: Option<&str>) -> DeviceSignal {
        let ua = match user_agent {
            Some(ua) if !ua.is_empty() => ua.to_lowercase(),
            _ => return DeviceSignal::Unrecognized,
        };

        if self.phone.matches_folded(&ua) {
            DeviceSignal::Phone
        } else if self.tablet.matches_folded(&ua) {
            DeviceSignal::Tablet
        } else if self.generic_mobile.matches_folded(&ua) {
            DeviceSignal::MobileUncertain
        } else {
            DeviceSignal::Unrecognized
        }
    }

    /// Reject empty patterns, which would match every user agent
    pub fn validate(&self) -> Result<()> {
        self.phone.validate("phone")?;
        self.tablet.validate("tablet")?;
        self.generic_mobile.validate("generic_mobile")?;
        Ok(())
    }
}
