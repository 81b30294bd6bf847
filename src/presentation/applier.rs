//! Presentation Applier
//!
//! Writes a tier onto a UI surface: the root element carries exactly one
//! tier class marker, and every link with a `data-href-<tier>` alternate
//! points at that alternate.

use crate::experience::tier::Tier;
use crate::presentation::surface::UiSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

// =============================================================================
// Apply Outcome
// =============================================================================

/// A stylesheet link that was repointed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetSwap {
    /// Previous href
    pub from: String,
    /// New href
    pub to: String,
}

/// Result of applying a tier to a surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Tier that was applied
    pub tier: Tier,
    /// Tier marker found before applying, if exactly one was present
    pub previous_tier: Option<Tier>,
    /// Whether the root class attribute was rewritten
    pub class_changed: bool,
    /// Links that were repointed
    pub swaps: Vec<StylesheetSwap>,
}

impl ApplyOutcome {
    /// Check if nothing on the surface changed
    pub fn is_noop(&self) -> bool {
        !self.class_changed && self.swaps.is_empty()
    }
}

// =============================================================================
// Presentation Applier
// =============================================================================

/// Applies experience tiers to UI surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationApplier;

impl PresentationApplier {
    /// Create a new applier
    pub fn new() -> Self {
        Self
    }

    /// Apply a tier to a surface
    pub fn apply<S: UiSurface + ?Sized>(&self, surface: &mut S, tier: Tier) -> ApplyOutcome {
        let (previous_tier, class_changed) = self.apply_marker(surface, tier);
        let swaps = self.apply_stylesheets(surface, tier);

        debug!(
            tier = %tier,
            previous = ?previous_tier,
            class_changed = class_changed,
            swaps = swaps.len(),
            "Applied experience"
        );

        ApplyOutcome {
            tier,
            previous_tier,
            class_changed,
            swaps,
        }
    }

    /// Replace any tier markers on the root with `tier`
    fn apply_marker<S: UiSurface + ?Sized>(
        &self,
        surface: &mut S,
        tier: Tier,
    ) -> (Option<Tier>, bool) {
        let current = surface.class_name();
        let markers: Vec<Tier> = current
            .split_whitespace()
            .filter_map(tier_marker)
            .collect();

        let previous_tier = match markers.as_slice() {
            [single] => Some(*single),
            _ => None,
        };

        if markers == [tier] {
            return (previous_tier, false);
        }

        let mut tokens: Vec<&str> = current
            .split_whitespace()
            .filter(|token| tier_marker(token).is_none())
            .collect();
        tokens.push(tier.as_str());
        let updated = tokens.join(" ");

        surface.set_class_name(updated);
        (previous_tier, true)
    }

    /// Point links at their alternate for `tier` where one differs
    fn apply_stylesheets<S: UiSurface + ?Sized>(
        &self,
        surface: &mut S,
        tier: Tier,
    ) -> Vec<StylesheetSwap> {
        let attr = tier.alternate_href_attr();
        let mut swaps = Vec::new();

        for link in surface.links_mut() {
            let alternate = match link.attribute(&attr) {
                Some(alt) if !alt.is_empty() => alt.to_string(),
                _ => continue,
            };

            if link.href == alternate {
                trace!(href = %link.href, "Stylesheet already active");
                continue;
            }

            let from = std::mem::replace(&mut link.href, alternate.clone());
            swaps.push(StylesheetSwap { from, to: alternate });
        }

        swaps
    }
}

/// Tier named by a class token, if any
fn tier_marker(token: &str) -> Option<Tier> {
    Tier::all().iter().copied().find(|t| t.as_str() == token)
}
