//! Experience Tier Definitions
//!
//! Defines the three experience tiers and their width-based placement rules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Width Thresholds
// =============================================================================

/// Default maximum viewport width for the phone experience (inclusive)
pub const PHONE_MAX_WIDTH: u32 = 480;

/// Default maximum viewport width for the tablet experience (inclusive)
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Prefix of the alternate stylesheet attribute, completed by the tier label
pub const ALTERNATE_HREF_PREFIX: &str = "data-href-";

// =============================================================================
// Tier
// =============================================================================

/// Experience tier served to a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Small touch screens
    Phone,
    /// Larger mobile surfaces
    Tablet,
    /// Unconstrained experience
    Desktop,
}

impl Tier {
    /// All tiers, smallest surface first
    pub fn all() -> &'static [Tier] {
        &[Tier::Phone, Tier::Tablet, Tier::Desktop]
    }

    /// Lowercase label, also used as the body class marker
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Phone => "phone",
            Tier::Tablet => "tablet",
            Tier::Desktop => "desktop",
        }
    }

    /// Name of the attribute carrying this tier's alternate stylesheet
    pub fn alternate_href_attr(&self) -> String {
        format!("{}{}", ALTERNATE_HREF_PREFIX, self.as_str())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Tier::Phone),
            "tablet" => Ok(Tier::Tablet),
            "desktop" => Ok(Tier::Desktop),
            _ => Err(Error::InvalidTier {
                label: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Tier Profiles
// =============================================================================

/// Per-tier width configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierProfile {
    /// Tier this profile applies to
    pub tier: Tier,
    /// Maximum viewport width served this tier, `None` when unbounded
    pub max_width: Option<u32>,
}

/// Width thresholds separating the tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportThresholds {
    /// Widths at or below this are phone
    pub phone_max_width: u32,
    /// Widths at or below this (and above phone) are tablet
    pub tablet_max_width: u32,
}

impl Default for ViewportThresholds {
    fn default() -> Self {
        Self {
            phone_max_width: PHONE_MAX_WIDTH,
            tablet_max_width: TABLET_MAX_WIDTH,
        }
    }
}

impl ViewportThresholds {
    /// Pick a tier purely from a width measurement
    pub fn tier_for_width(&self, width: u32) -> Tier {
        if width <= self.phone_max_width {
            Tier::Phone
        } else if width <= self.tablet_max_width {
            Tier::Tablet
        } else {
            Tier::Desktop
        }
    }

    /// Profile for a tier under these thresholds
    pub fn profile(&self, tier: Tier) -> TierProfile {
        let max_width = match tier {
            Tier::Phone => Some(self.phone_max_width),
            Tier::Tablet => Some(self.tablet_max_width),
            Tier::Desktop => None,
        };
        TierProfile { tier, max_width }
    }

    /// Profiles for every tier, smallest surface first
    pub fn profiles(&self) -> Vec<TierProfile> {
        Tier::all().iter().map(|t| self.profile(*t)).collect()
    }

    /// Validate threshold ordering
    pub fn validate(&self) -> Result<()> {
        if self.phone_max_width == 0 {
            return Err(Error::Configuration(
                "phone_max_width must be greater than zero".to_string(),
            ));
        }
        if self.phone_max_width >= self.tablet_max_width {
            return Err(Error::Configuration(format!(
                "phone_max_width ({}) must be below tablet_max_width ({})",
                self.phone_max_width, self.tablet_max_width
            )));
        }
        Ok(())
    }
}
