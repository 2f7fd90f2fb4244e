use crate::activation::{MouseActivation, TouchActivation};
use crate::events::{MouseInput, TouchInput};
use crate::geometry::{
    align_item_on_position, calculate_item_position, center_item_on_position,
    create_adjusted_limits, limit_position, Dimensions, Point,
};
use crate::host::{ActivationHost, GestureFlags, MoveLimits};
use crate::settings::SessionSettings;
use crate::timers::{GestureTimers, TimerDurations, TimerKind};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    MouseDown(MouseInput),
    MouseUp(MouseInput),
    MouseMove(MouseInput),
    MouseEnter(MouseInput),
    MouseLeave,
    DoubleClick(MouseInput),
    TouchStart(TouchInput),
    TouchEnd(TouchInput),
    TouchMove(TouchInput),
    TouchCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionUpdate {
    #[serde(rename_all = "camelCase")]
    Activated {
        active_position: Point,
        item_position: Point,
    },
    Deactivated,
    #[serde(rename_all = "camelCase")]
    Moved {
        active_position: Point,
        item_position: Point,
    },
    #[serde(rename_all = "camelCase")]
    PassiveMoved { passive_position: Point },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub active: bool,
    pub active_position: Point,
    pub prev_active_position: Point,
    pub passive_position: Point,
    pub item_position: Point,
}

/// Reference [`ActivationHost`]: owns activation state, gesture timers and
/// the item being moved around inside an element.
#[derive(Debug)]
pub struct InputSession {
    settings: SessionSettings,
    mouse: MouseActivation,
    touch: TouchActivation,
    durations: TimerDurations,
    min_update_interval: Option<Duration>,
    flags: GestureFlags,
    timers: GestureTimers,
    long_touch_position: Option<Point>,
    now: Instant,
    last_update: Option<Instant>,
    element_offset: Point,
    element_dimensions: Option<Dimensions>,
    item_dimensions: Dimensions,
    state: SessionState,
    updates: Vec<SessionUpdate>,
}

impl InputSession {
    pub fn new(settings: SessionSettings, now: Instant) -> Self {
        Self {
            mouse: settings.mouse_activation,
            touch: settings.touch_activation,
            durations: settings.timer_durations(),
            min_update_interval: settings.min_update_interval(),
            settings,
            flags: GestureFlags::default(),
            timers: GestureTimers::default(),
            long_touch_position: None,
            now,
            last_update: None,
            element_offset: Point::default(),
            element_dimensions: None,
            item_dimensions: Dimensions::default(),
            state: SessionState::default(),
            updates: Vec::new(),
        }
    }

    /// Where the element sits in client coordinates and how large it is.
    pub fn set_element_bounds(&mut self, offset: Point, dimensions: Dimensions) {
        self.element_offset = offset;
        self.element_dimensions = Some(dimensions);
    }

    pub fn set_item_dimensions(&mut self, dimensions: Dimensions) {
        self.item_dimensions = dimensions;
    }

    pub fn set_item_position(&mut self, position: Point) {
        self.state.item_position = self.limit_item(position);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn mouse_activation(&self) -> MouseActivation {
        self.mouse
    }

    pub fn touch_activation(&self) -> TouchActivation {
        self.touch
    }

    pub fn timers(&self) -> &GestureTimers {
        &self.timers
    }

    pub fn drain_updates(&mut self) -> Vec<SessionUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Dispatch one input event to the configured gesture modes.
    ///
    /// Timers due by `now` fire first. Returns whether the platform default
    /// of the event should be suppressed.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        self.advance(now);
        let mouse = self.mouse;
        let touch = self.touch;
        match event {
            InputEvent::MouseDown(input) => mouse.mouse_down(self, &input),
            InputEvent::MouseUp(input) => mouse.mouse_up(self, &input),
            InputEvent::MouseMove(input) => mouse.mouse_move(self, &input),
            InputEvent::MouseEnter(input) => mouse.mouse_enter(self, &input),
            InputEvent::MouseLeave => {
                if mouse == MouseActivation::MouseDown && self.settings.mouse_down_allow_outside {
                    tracing::trace!("mouse left element while held; keeping drag");
                } else {
                    mouse.mouse_leave(self);
                }
            }
            InputEvent::DoubleClick(input) => mouse.double_click(self, &input),
            InputEvent::TouchStart(input) => touch.touch_start(self, &input),
            InputEvent::TouchEnd(mut input) => {
                touch.touch_end(self, &mut input);
                return input.default_prevented();
            }
            InputEvent::TouchMove(mut input) => {
                touch.touch_move(self, &mut input);
                return input.default_prevented();
            }
            InputEvent::TouchCancel => {
                self.end_touch_cycle();
                touch.touch_cancel(self);
            }
        }
        false
    }

    /// Move the session clock forward, firing every timer that expired.
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        for kind in self.timers.expire(self.now) {
            self.fire(kind);
        }
    }

    fn fire(&mut self, kind: TimerKind) {
        tracing::debug!(?kind, "gesture timer expired");
        match kind {
            TimerKind::Tap => {
                self.flags.tap_timed_out = true;
                self.flags.touched = false;
            }
            TimerKind::DoubleTap => self.flags.double_tap_timed_out = true,
            TimerKind::LongTouch => {
                let position = self.long_touch_position.take();
                if let (true, Some(position)) = (self.flags.touched, position) {
                    self.activate(position);
                }
            }
        }
    }

    /// A cancelled contact abandons every pending touch timer and tap sequence.
    fn end_touch_cycle(&mut self) {
        self.timers.tap.clear();
        self.timers.double_tap.clear();
        self.clear_long_touch_timer();
        self.flags.touched = false;
        self.flags.tapped = false;
        self.flags.tap_timed_out = false;
        self.flags.double_tap_timed_out = false;
    }

    fn relative(&self, position: Point) -> Point {
        Point::new(
            position.x - self.element_offset.x,
            position.y - self.element_offset.y,
        )
    }

    fn clamp_to_element(&self, position: Point) -> Point {
        match self.element_dimensions {
            Some(dims) => Point::new(
                position.x.max(0.0).min(dims.width),
                position.y.max(0.0).min(dims.height),
            ),
            None => position,
        }
    }

    fn limit_item(&self, position: Point) -> Point {
        let limits = create_adjusted_limits(
            self.settings.item_position_limits,
            self.element_dimensions.unwrap_or_default(),
            self.item_dimensions,
            self.settings.limit_by_size,
            self.settings.limit_internal,
        );
        limit_position(&limits, position)
    }

    fn accept_update(&mut self) -> bool {
        if let (Some(interval), Some(last)) = (self.min_update_interval, self.last_update) {
            if self.now.duration_since(last) < interval {
                return false;
            }
        }
        self.last_update = Some(self.now);
        true
    }

    fn placed_on_activation(&self, active_position: Point) -> Option<Point> {
        let place: fn(Dimensions, Dimensions, Point) -> Point =
            if self.settings.center_item_on_activate {
                center_item_on_position
            } else if self.settings.align_item_on_activate {
                align_item_on_position
            } else {
                return None;
            };
        match self.element_dimensions {
            Some(elem) if elem.width != 0.0 && elem.height != 0.0 => {
                Some(place(elem, self.item_dimensions, active_position))
            }
            _ => {
                tracing::warn!(
                    dimensions = ?self.element_dimensions,
                    "cannot place item without element dimensions"
                );
                None
            }
        }
    }
}

impl ActivationHost for InputSession {
    fn is_active(&self) -> bool {
        self.state.active
    }

    fn flags(&self) -> &GestureFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut GestureFlags {
        &mut self.flags
    }

    fn move_limits(&self) -> MoveLimits {
        self.settings.move_limits()
    }

    fn activate(&mut self, position: Point) {
        let active_position = self.clamp_to_element(self.relative(position));
        self.state.active = true;
        self.state.active_position = active_position;
        self.state.prev_active_position = active_position;

        if self.settings.track_item_position {
            if let Some(item) = self.placed_on_activation(active_position) {
                self.state.item_position = self.limit_item(item);
            }
        }

        tracing::debug!(x = active_position.x, y = active_position.y, "activated");
        self.updates.push(SessionUpdate::Activated {
            active_position,
            item_position: self.state.item_position,
        });
    }

    fn deactivate(&mut self) {
        if !self.state.active {
            return;
        }
        self.state.active = false;
        tracing::debug!("deactivated");
        self.updates.push(SessionUpdate::Deactivated);
    }

    fn toggle_active(&mut self, position: Point) {
        if self.state.active {
            self.deactivate();
        } else {
            self.activate(position);
        }
    }

    fn set_position(&mut self, position: Point, pressed: bool) {
        if !self.accept_update() {
            return;
        }
        let active_position = self.clamp_to_element(self.relative(position));
        let prev = self.state.active_position;
        self.state.prev_active_position = prev;
        self.state.active_position = active_position;

        if self.settings.track_item_position && pressed {
            let item = if self.settings.link_item_to_active {
                active_position
            } else {
                calculate_item_position(
                    self.state.item_position,
                    prev,
                    active_position,
                    self.settings.item_movement_multiplier,
                )
            };
            self.state.item_position = self.limit_item(item);
        }

        self.updates.push(SessionUpdate::Moved {
            active_position,
            item_position: self.state.item_position,
        });
    }

    fn set_passive_position(&mut self, position: Point) {
        if !self.settings.track_passive_position || !self.accept_update() {
            return;
        }
        let passive_position = self.relative(position);
        self.state.passive_position = passive_position;
        self.updates.push(SessionUpdate::PassiveMoved { passive_position });
    }

    fn start_tap_timer(&mut self) {
        // An expiry left over from an earlier contact belongs to that cycle.
        self.flags.tap_timed_out = false;
        self.timers.tap.start(self.now, self.durations.tap);
    }

    fn start_double_tap_timer(&mut self) {
        self.timers.double_tap.start(self.now, self.durations.double_tap);
    }

    fn start_long_touch_timer(&mut self, position: Point) {
        self.long_touch_position = Some(position);
        self.timers.long_touch.start(self.now, self.durations.long_touch);
    }

    fn clear_tap_timer(&mut self) {
        self.timers.tap.clear();
    }

    fn clear_double_tap_timer(&mut self) {
        self.timers.double_tap.clear();
    }

    fn clear_long_touch_timer(&mut self) {
        self.long_touch_position = None;
        self.timers.long_touch.clear();
    }
}
