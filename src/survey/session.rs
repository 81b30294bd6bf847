//! Survey Session
//!
//! Glue between page triggers and the classifier: every trigger samples the
//! environment afresh, classifies, and applies the result to the UI root the
//! caller passes in.

use crate::experience::classifier::ExperienceClassifier;
use crate::experience::tier::Tier;
use crate::presentation::applier::PresentationApplier;
use crate::presentation::surface::UiSurface;
use crate::survey::environment::Environment;
use crate::survey::events::SurveyEvent;
use crate::survey::trigger::Trigger;
use chrono::Utc;
use tracing::{debug, info};

/// Re-classifies a client on page triggers
pub struct SurveySession<E: Environment> {
    classifier: ExperienceClassifier,
    applier: PresentationApplier,
    environment: E,
    current: Option<Tier>,
}

impl<E: Environment> SurveySession<E> {
    /// Create a session with the default classifier
    pub fn new(environment: E) -> Self {
        Self::with_classifier(ExperienceClassifier::new(), environment)
    }

    /// Create a session with a custom classifier
    pub fn with_classifier(classifier: ExperienceClassifier, environment: E) -> Self {
        Self {
            classifier,
            applier: PresentationApplier::new(),
            environment,
            current: None,
        }
    }

    /// Environment the session samples from
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Mutable access to the environment, for callers feeding readings
    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }

    /// Last tier applied by this session
    pub fn current_tier(&self) -> Option<Tier> {
        self.current
    }

    /// Handle a trigger against the given UI root
    pub fn handle<S: UiSurface + ?Sized>(&mut self, trigger: Trigger, root: &mut S) -> SurveyEvent {
        if trigger != Trigger::Load && self.current.is_none() {
            debug!(trigger = %trigger, "Trigger received before any experience was applied");
        }

        let width = self.environment.viewport().resolve();
        let classification = self
            .classifier
            .classify_detailed(self.environment.user_agent(), width);

        let outcome = self.applier.apply(root, classification.tier);
        let previous = self.current.replace(classification.tier);

        if outcome.is_noop() {
            debug!(trigger = %trigger, tier = %classification.tier, "Experience unchanged");
            return SurveyEvent::ExperienceUnchanged {
                trigger,
                classification,
                at: Utc::now(),
            };
        }

        if previous != Some(classification.tier) {
            info!(
                trigger = %trigger,
                from = ?previous,
                to = %classification.tier,
                basis = %classification.basis,
                "Experience changed"
            );
        }

        SurveyEvent::ExperienceApplied {
            trigger,
            classification,
            previous_tier: outcome.previous_tier,
            swaps: outcome.swaps,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experience::classifier::DecisionBasis;
    use crate::presentation::surface::{LinkElement, MemoryDocument};
    use crate::survey::environment::{StaticEnvironment, ViewportProbe};
    use assert_matches::assert_matches;

    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";

    fn document() -> MemoryDocument {
        MemoryDocument::with_links(
            "page",
            vec![LinkElement::new("/css/site.css")
                .with_attribute("data-href-phone", "/css/site-phone.css")
                .with_attribute("data-href-tablet", "/css/site-tablet.css")
                .with_attribute("data-href-desktop", "/css/site.css")],
        )
    }

    #[test]
    fn test_load_applies_experience() {
        let env = StaticEnvironment::new(None, ViewportProbe::client(1440));
        let mut session = SurveySession::new(env);
        let mut doc = document();

        let event = session.handle(Trigger::Load, &mut doc);

        assert_matches!(event, SurveyEvent::ExperienceApplied { trigger: Trigger::Load, .. });
        assert_eq!(event.tier(), Tier::Desktop);
        assert_eq!(doc.body_class, "page desktop");
        assert_eq!(doc.links[0].href, "/css/site.css");
        assert_eq!(session.current_tier(), Some(Tier::Desktop));
    }

    #[test]
    fn test_resize_resamples_environment() {
        let env = StaticEnvironment::new(Some(ANDROID_UA.into()), ViewportProbe::client(900));
        let mut session = SurveySession::new(env);
        let mut doc = document();

        let event = session.handle(Trigger::Load, &mut doc);
        assert_eq!(event.tier(), Tier::Tablet);
        assert_eq!(doc.links[0].href, "/css/site-tablet.css");

        session.environment_mut().viewport = ViewportProbe::client(400);
        let event = session.handle(Trigger::OrientationChange, &mut doc);

        assert_eq!(event.tier(), Tier::Phone);
        assert_matches!(
            event,
            SurveyEvent::ExperienceApplied { previous_tier: Some(Tier::Tablet), ref swaps, .. } if swaps.len() == 1
        );
        assert_eq!(doc.body_class, "page phone");
        assert_eq!(doc.links[0].href, "/css/site-phone.css");
    }

    #[test]
    fn test_repeated_trigger_is_unchanged() {
        let env = StaticEnvironment::new(None, ViewportProbe::client(320));
        let mut session = SurveySession::new(env);
        let mut doc = document();

        session.handle(Trigger::Load, &mut doc);
        let snapshot = doc.clone();

        for _ in 0..5 {
            let event = session.handle(Trigger::Resize, &mut doc);
            assert_matches!(event, SurveyEvent::ExperienceUnchanged { .. });
        }
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_mobile_without_width() {
        let env = StaticEnvironment::new(Some(ANDROID_UA.into()), ViewportProbe::default());
        let mut session = SurveySession::new(env);
        let mut doc = MemoryDocument::new();

        let event = session.handle(Trigger::Load, &mut doc);

        assert_eq!(event.tier(), Tier::Tablet);
        assert_eq!(event.basis(), DecisionBasis::MobileWithoutWidth);
        assert_eq!(doc.body_class, "tablet");
    }

    #[test]
    fn test_resize_before_load_still_applies() {
        let env = StaticEnvironment::new(None, ViewportProbe::client(1000));
        let mut session = SurveySession::new(env);
        let mut doc = MemoryDocument::new();

        let event = session.handle(Trigger::Resize, &mut doc);

        assert!(event.is_change());
        assert_eq!(doc.body_class, "tablet");
    }
}
