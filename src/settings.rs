use crate::activation::{MouseActivation, TouchActivation};
use crate::geometry::Limits;
use crate::host::MoveLimits;
use crate::timers::TimerDurations;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettings {
    #[serde(default)]
    pub mouse_activation: MouseActivation,
    #[serde(default)]
    pub touch_activation: TouchActivation,
    #[serde(default = "default_tap_duration")]
    pub tap_duration_ms: u64,
    #[serde(default = "default_double_tap_duration")]
    pub double_tap_duration_ms: u64,
    #[serde(default = "default_long_touch_duration")]
    pub long_touch_duration_ms: u64,
    /// Largest `x + y` drift between press and release still counted as a click.
    #[serde(default = "default_click_move_limit")]
    pub click_move_limit: f64,
    #[serde(default = "default_long_touch_move_limit")]
    pub long_touch_move_limit: f64,
    /// Keep a press-hold drag alive when the pointer leaves the element.
    #[serde(default)]
    pub mouse_down_allow_outside: bool,
    /// Position updates closer together than this are dropped. `0` disables.
    #[serde(default)]
    pub min_update_interval_ms: u64,
    #[serde(default)]
    pub track_item_position: bool,
    #[serde(default = "default_true")]
    pub track_passive_position: bool,
    /// Move the item to the active position instead of by the drag delta.
    #[serde(default)]
    pub link_item_to_active: bool,
    #[serde(default = "default_multiplier")]
    pub item_movement_multiplier: f64,
    #[serde(default)]
    pub item_position_limits: Limits,
    #[serde(default)]
    pub limit_by_size: bool,
    #[serde(default = "default_true")]
    pub limit_internal: bool,
    #[serde(default)]
    pub center_item_on_activate: bool,
    #[serde(default)]
    pub align_item_on_activate: bool,
    /// When enabled the replay tool initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn default_tap_duration() -> u64 {
    millis(TimerDurations::default().tap)
}

fn default_double_tap_duration() -> u64 {
    millis(TimerDurations::default().double_tap)
}

fn default_long_touch_duration() -> u64 {
    millis(TimerDurations::default().long_touch)
}

fn default_click_move_limit() -> f64 {
    MoveLimits::default().click_move_limit
}

fn default_long_touch_move_limit() -> f64 {
    MoveLimits::default().long_touch_move_limit
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mouse_activation: MouseActivation::default(),
            touch_activation: TouchActivation::default(),
            tap_duration_ms: default_tap_duration(),
            double_tap_duration_ms: default_double_tap_duration(),
            long_touch_duration_ms: default_long_touch_duration(),
            click_move_limit: default_click_move_limit(),
            long_touch_move_limit: default_long_touch_move_limit(),
            mouse_down_allow_outside: false,
            min_update_interval_ms: 0,
            track_item_position: false,
            track_passive_position: true,
            link_item_to_active: false,
            item_movement_multiplier: default_multiplier(),
            item_position_limits: Limits::unbounded(),
            limit_by_size: false,
            limit_internal: true,
            center_item_on_activate: false,
            align_item_on_activate: false,
            debug_logging: false,
        }
    }
}

impl SessionSettings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("invalid session settings in {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn move_limits(&self) -> MoveLimits {
        MoveLimits {
            click_move_limit: self.click_move_limit,
            long_touch_move_limit: self.long_touch_move_limit,
        }
    }

    pub fn timer_durations(&self) -> TimerDurations {
        TimerDurations {
            tap: Duration::from_millis(self.tap_duration_ms),
            double_tap: Duration::from_millis(self.double_tap_duration_ms),
            long_touch: Duration::from_millis(self.long_touch_duration_ms),
        }
    }

    pub fn min_update_interval(&self) -> Option<Duration> {
        (self.min_update_interval_ms > 0)
            .then(|| Duration::from_millis(self.min_update_interval_ms))
    }
}
