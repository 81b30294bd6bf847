//! Survey Configuration
//!
//! YAML configuration for the classifier thresholds, the signature sets,
//! and the page the CLI applies experiences to. Every section is optional
//! and falls back to the built-in defaults.
//!
//! ```yaml
//! viewport:
//!   phone_max_width: 480
//!   tablet_max_width: 1024
//! signatures:
//!   phone: [iPhone, iPod, BlackBerry]
//!   tablet: [iPad, Kindle, Silk, PlayBook]
//!   generic_mobile: [Android]
//! document:
//!   body_class: page
//!   links:
//!     - href: /css/site.css
//!       attributes:
//!         data-href-phone: /css/site-phone.css
//! ```

use crate::error::{Error, Result};
use crate::experience::classifier::ClassifierConfig;
use crate::experience::tier::{Tier, TierProfile, ALTERNATE_HREF_PREFIX};
use crate::presentation::surface::MemoryDocument;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Top-level keys accepted in a configuration file
const TOP_LEVEL_KEYS: &[&str] = &["viewport", "signatures", "document"];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Thresholds and signatures
    #[serde(flatten)]
    pub classifier: ClassifierConfig,
    /// Initial page state for replays
    pub document: MemoryDocument,
}

impl SurveyConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SurveyConfig = if yaml.trim().is_empty() {
            SurveyConfig::default()
        } else {
            let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
            reject_unknown_keys(&value)?;
            serde_yaml::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), "Loaded survey configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;

        for link in &self.document.links {
            if link.href.trim().is_empty() {
                return Err(Error::Configuration(
                    "document link with empty href".to_string(),
                ));
            }
            for name in link.attributes.keys() {
                if let Some(label) = name.strip_prefix(ALTERNATE_HREF_PREFIX) {
                    if label.parse::<Tier>().is_err() {
                        warn!(attribute = %name, href = %link.href, "Alternate for unknown tier is never used");
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the configuration as YAML, preceded by the resulting tier profiles
    pub fn report_yaml(&self) -> Result<String> {
        let report = ConfigReport {
            profiles: self.classifier.viewport.profiles(),
            config: self,
        };
        Ok(serde_yaml::to_string(&report)?)
    }
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    profiles: Vec<TierProfile>,
    #[serde(flatten)]
    config: &'a SurveyConfig,
}

/// Flattened sections cannot deny unknown fields, so the top level is checked by hand
fn reject_unknown_keys(value: &serde_yaml::Value) -> Result<()> {
    let Some(mapping) = value.as_mapping() else {
        return Ok(());
    };

    for key in mapping.keys() {
        let name = key.as_str().unwrap_or_default();
        if !TOP_LEVEL_KEYS.contains(&name) {
            return Err(Error::Configuration(format!(
                "unknown configuration key {:?}, expected one of: {}",
                name,
                TOP_LEVEL_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}
