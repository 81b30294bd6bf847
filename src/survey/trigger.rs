//! Survey Triggers
//!
//! Page events that cause the client to be re-classified.

use serde::{Deserialize, Serialize};

/// Event that re-runs classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Initial page ready signal
    Load,
    /// Viewport resized
    Resize,
    /// Device rotated
    #[serde(alias = "orientation_change")]
    OrientationChange,
}

impl Trigger {
    /// Event name as bound on the page
    pub fn event_name(&self) -> &'static str {
        match self {
            Trigger::Load => "load",
            Trigger::Resize => "resize",
            Trigger::OrientationChange => "orientationchange",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_names() {
        let trigger: Trigger = serde_json::from_str("\"orientationchange\"").unwrap();
        assert_eq!(trigger, Trigger::OrientationChange);

        let trigger: Trigger = serde_json::from_str("\"orientation_change\"").unwrap();
        assert_eq!(trigger, Trigger::OrientationChange);

        assert_eq!(serde_json::to_string(&Trigger::Resize).unwrap(), "\"resize\"");
        assert_eq!(Trigger::Load.to_string(), "load");
    }
}
