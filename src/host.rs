use crate::geometry::Point;

/// Per-press bookkeeping the gesture handlers keep on their host.
///
/// Mouse modes only touch `mouse_down` and `click_move_start_ref`; touch modes
/// only touch the remaining fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureFlags {
    pub mouse_down: bool,
    pub touched: bool,
    /// `x + y` of the press that started the current click.
    pub click_move_start_ref: Option<f64>,
    /// `x + y` of the contact that started the current long touch.
    pub long_touch_start_ref: Option<f64>,
    pub tapped: bool,
    pub tap_timed_out: bool,
    pub double_tap_timed_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveLimits {
    pub click_move_limit: f64,
    pub long_touch_move_limit: f64,
}

impl Default for MoveLimits {
    fn default() -> Self {
        Self {
            click_move_limit: 5.0,
            long_touch_move_limit: 5.0,
        }
    }
}

/// The component that owns activation state and timers.
///
/// Gesture handlers read and write [`GestureFlags`] through this trait and
/// report recognised gestures through its callbacks. They never schedule
/// anything themselves: timers are started and cleared by the host, and an
/// expired timer is communicated back only through the `*_timed_out` flags.
pub trait ActivationHost {
    fn is_active(&self) -> bool;
    fn flags(&self) -> &GestureFlags;
    fn flags_mut(&mut self) -> &mut GestureFlags;
    fn move_limits(&self) -> MoveLimits;

    fn activate(&mut self, position: Point);
    fn deactivate(&mut self);
    fn toggle_active(&mut self, position: Point);
    /// `pressed` is true while the pointer is engaged with the item.
    fn set_position(&mut self, position: Point, pressed: bool);
    fn set_passive_position(&mut self, position: Point);

    fn start_tap_timer(&mut self);
    fn start_double_tap_timer(&mut self);
    fn start_long_touch_timer(&mut self, position: Point);
    fn clear_tap_timer(&mut self);
    fn clear_double_tap_timer(&mut self);
    fn clear_long_touch_timer(&mut self);
}
