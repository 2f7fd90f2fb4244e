//! Replays a recorded event script through an [`InputSession`].

use crate::geometry::{Dimensions, Point};
use crate::session::{InputEvent, InputSession, SessionUpdate};
use crate::settings::SessionSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub at_ms: u64,
    pub event: InputEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBounds {
    pub offset: Point,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayScript {
    #[serde(default)]
    pub element: Option<ElementBounds>,
    #[serde(default)]
    pub item_dimensions: Option<Dimensions>,
    #[serde(default)]
    pub item_position: Option<Point>,
    pub steps: Vec<ReplayStep>,
    /// Clock value the session is advanced to after the last step, so that
    /// trailing timers get a chance to fire.
    #[serde(default)]
    pub end_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRecord {
    pub at_ms: u64,
    pub update: SessionUpdate,
}

pub fn load_script(path: impl AsRef<Path>) -> anyhow::Result<ReplayScript> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read replay script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid replay script {}", path.display()))
}

pub fn run(settings: SessionSettings, script: &ReplayScript) -> Vec<ReplayRecord> {
    let start = Instant::now();
    let mut session = InputSession::new(settings, start);
    if let Some(element) = &script.element {
        session.set_element_bounds(element.offset, element.dimensions);
    }
    if let Some(dimensions) = script.item_dimensions {
        session.set_item_dimensions(dimensions);
    }
    if let Some(position) = script.item_position {
        session.set_item_position(position);
    }

    let mut records = Vec::new();
    for step in &script.steps {
        let now = start + Duration::from_millis(step.at_ms);
        session.handle(step.event.clone(), now);
        records.extend(
            session
                .drain_updates()
                .into_iter()
                .map(|update| ReplayRecord {
                    at_ms: step.at_ms,
                    update,
                }),
        );
    }

    if let Some(end_ms) = script.end_ms {
        session.advance(start + Duration::from_millis(end_ms));
        records.extend(
            session
                .drain_updates()
                .into_iter()
                .map(|update| ReplayRecord { at_ms: end_ms, update }),
        );
    }

    tracing::debug!(steps = script.steps.len(), updates = records.len(), "replay finished");
    records
}
