//! Survey Events
//!
//! Events emitted by a survey session for each handled trigger.

use crate::experience::classifier::{Classification, DecisionBasis};
use crate::experience::tier::Tier;
use crate::presentation::applier::StylesheetSwap;
use crate::survey::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events emitted by a survey session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SurveyEvent {
    /// The surface was updated for a (possibly new) tier
    ExperienceApplied {
        trigger: Trigger,
        classification: Classification,
        previous_tier: Option<Tier>,
        swaps: Vec<StylesheetSwap>,
        at: DateTime<Utc>,
    },

    /// The surface already showed the classified tier
    ExperienceUnchanged {
        trigger: Trigger,
        classification: Classification,
        at: DateTime<Utc>,
    },
}

impl SurveyEvent {
    /// Trigger that produced this event
    pub fn trigger(&self) -> Trigger {
        match self {
            SurveyEvent::ExperienceApplied { trigger, .. } => *trigger,
            SurveyEvent::ExperienceUnchanged { trigger, .. } => *trigger,
        }
    }

    /// Classification behind this event
    pub fn classification(&self) -> &Classification {
        match self {
            SurveyEvent::ExperienceApplied { classification, .. } => classification,
            SurveyEvent::ExperienceUnchanged { classification, .. } => classification,
        }
    }

    /// Tier in effect after this event
    pub fn tier(&self) -> Tier {
        self.classification().tier
    }

    /// Rule that decided the tier
    pub fn basis(&self) -> DecisionBasis {
        self.classification().basis
    }

    /// Check if the surface changed
    pub fn is_change(&self) -> bool {
        matches!(self, SurveyEvent::ExperienceApplied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experience::signature::DeviceSignal;

    fn classification(tier: Tier) -> Classification {
        Classification {
            tier,
            signal: DeviceSignal::Unrecognized,
            basis: DecisionBasis::ViewportWidth,
            viewport_width: Some(800),
        }
    }

    #[test]
    fn test_event_accessors() {
        let event = SurveyEvent::ExperienceApplied {
            trigger: Trigger::Resize,
            classification: classification(Tier::Tablet),
            previous_tier: Some(Tier::Phone),
            swaps: vec![],
            at: Utc::now(),
        };
        assert_eq!(event.trigger(), Trigger::Resize);
        assert_eq!(event.tier(), Tier::Tablet);
        assert_eq!(event.basis(), DecisionBasis::ViewportWidth);
        assert!(event.is_change());
    }

    #[test]
    fn test_event_serializes_tagged() {
        let event = SurveyEvent::ExperienceUnchanged {
            trigger: Trigger::OrientationChange,
            classification: classification(Tier::Tablet),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "experience_unchanged");
        assert_eq!(json["trigger"], "orientationchange");
        assert_eq!(json["classification"]["tier"], "tablet");
        assert!(!event.is_change());
    }
}
