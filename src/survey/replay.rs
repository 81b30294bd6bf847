//! Trigger Replay
//!
//! Drives a survey session from a JSON-lines stream of trigger samples and
//! writes one JSON event per sample.

use crate::error::{Error, Result};
use crate::experience::tier::Tier;
use crate::presentation::surface::UiSurface;
use crate::survey::environment::{StaticEnvironment, ViewportProbe};
use crate::survey::session::SurveySession;
use crate::survey::trigger::Trigger;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// One trigger with the readings sampled at that moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSample {
    /// Event that fired
    pub trigger: Trigger,
    /// User agent at the time of the event
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Width readings at the time of the event
    #[serde(flatten)]
    pub viewport: ViewportProbe,
}

/// Totals for a replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Samples handled
    pub triggers: usize,
    /// Samples that changed the surface
    pub changes: usize,
    /// Tier in effect after the last sample
    pub final_tier: Option<Tier>,
}

/// Replay samples from `reader` against `root`, writing events to `writer`
pub async fn replay<S, R, W>(
    session: &mut SurveySession<StaticEnvironment>,
    root: &mut S,
    reader: R,
    mut writer: W,
) -> Result<ReplaySummary>
where
    S: UiSurface + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut segments = reader.split(b'\n');
    let mut summary = ReplaySummary::default();
    let mut line_no = 0usize;

    while let Some(raw) = segments.next_segment().await? {
        line_no += 1;
        let text = String::from_utf8(raw).map_err(|e| Error::InvalidSample {
            line: line_no,
            reason: e.to_string(),
        })?;
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        let sample: TriggerSample = serde_json::from_str(line).map_err(|e| Error::InvalidSample {
            line: line_no,
            reason: e.to_string(),
        })?;
        debug!(line = line_no, trigger = %sample.trigger, "Replaying sample");

        let env = session.environment_mut();
        env.user_agent = sample.user_agent;
        env.viewport = sample.viewport;

        let event = session.handle(sample.trigger, root);
        summary.triggers += 1;
        if event.is_change() {
            summary.changes += 1;
        }

        let mut encoded = serde_json::to_vec(&event)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
    }

    writer.flush().await?;
    summary.final_tier = session.current_tier();

    info!(
        triggers = summary.triggers,
        changes = summary.changes,
        final_tier = ?summary.final_tier,
        "Replay complete"
    );

    Ok(summary)
}
