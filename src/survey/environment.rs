//! Client Environment
//!
//! Where the survey samples its inputs from: the user-agent string and the
//! viewport width readings available on the client.

use serde::{Deserialize, Serialize};

// =============================================================================
// Viewport Probe
// =============================================================================

/// Raw width readings, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportProbe {
    /// Document element client width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_width: Option<u32>,
    /// Window inner width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_width: Option<u32>,
    /// Window outer width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_width: Option<u32>,
}

impl ViewportProbe {
    /// Probe with only a client width reading
    pub fn client(width: u32) -> Self {
        Self {
            client_width: Some(width),
            ..Default::default()
        }
    }

    /// Resolve a single width.
    ///
    /// Sources are tried in priority order and the first positive reading
    /// wins. A zero reading is only used when no source has a positive one,
    /// and is then reported as a present measurement.
    pub fn resolve(&self) -> Option<u32> {
        let readings = [self.client_width, self.inner_width, self.outer_width];

        readings
            .iter()
            .flatten()
            .copied()
            .find(|w| *w > 0)
            .or_else(|| readings.iter().flatten().copied().next())
    }
}

// =============================================================================
// Environment Port
// =============================================================================

/// Source of classification inputs, sampled on every trigger
pub trait Environment {
    /// Client identification string, if the client reports one
    fn user_agent(&self) -> Option<&str>;

    /// Current viewport readings
    fn viewport(&self) -> ViewportProbe;
}

/// Environment holding fixed readings that callers update between triggers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticEnvironment {
    /// Reported user agent
    pub user_agent: Option<String>,
    /// Reported viewport readings
    pub viewport: ViewportProbe,
}

impl StaticEnvironment {
    /// Create an environment with the given readings
    pub fn new(user_agent: Option<String>, viewport: ViewportProbe) -> Self {
        Self {
            user_agent,
            viewport,
        }
    }
}

impl Environment for StaticEnvironment {
    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn viewport(&self) -> ViewportProbe {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_priority() {
        let probe = ViewportProbe {
            client_width: Some(800),
            inner_width: Some(820),
            outer_width: Some(840),
        };
        assert_eq!(probe.resolve(), Some(800));

        let probe = ViewportProbe {
            client_width: None,
            inner_width: Some(820),
            outer_width: Some(840),
        };
        assert_eq!(probe.resolve(), Some(820));

        let probe = ViewportProbe {
            outer_width: Some(840),
            ..Default::default()
        };
        assert_eq!(probe.resolve(), Some(840));
    }

    #[test]
    fn test_resolve_skips_zero_readings() {
        let probe = ViewportProbe {
            client_width: Some(0),
            inner_width: None,
            outer_width: Some(1280),
        };
        assert_eq!(probe.resolve(), Some(1280));
    }

    #[test]
    fn test_resolve_zero_only() {
        let probe = ViewportProbe {
            client_width: Some(0),
            inner_width: Some(0),
            outer_width: None,
        };
        assert_eq!(probe.resolve(), Some(0));
    }

    #[test]
    fn test_resolve_unavailable() {
        assert_eq!(ViewportProbe::default().resolve(), None);
    }

    #[test]
    fn test_static_environment() {
        let env = StaticEnvironment::new(Some("iPhone".into()), ViewportProbe::client(375));
        assert_eq!(env.user_agent(), Some("iPhone"));
        assert_eq!(env.viewport().resolve(), Some(375));

        let env = StaticEnvironment::default();
        assert_eq!(env.user_agent(), None);
    }
}
