use crate::events::TouchInput;
use crate::host::ActivationHost;
use serde::{Deserialize, Serialize};

/// How a single touch contact engages the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchActivation {
    /// A short tap toggles activation.
    #[default]
    Tap,
    /// Two taps inside the double-tap window toggle activation.
    DoubleTap,
    /// Active only while the contact is down.
    Touch,
    /// Holding still for the long-touch duration activates.
    LongTouch,
}

impl TouchActivation {
    pub fn touch_start<H: ActivationHost>(self, host: &mut H, input: &TouchInput) {
        tracing::trace!(mode = ?self, "touch start");
        match self {
            TouchActivation::Tap | TouchActivation::DoubleTap => {
                host.flags_mut().touched = true;
                host.start_tap_timer();
            }
            TouchActivation::Touch => {
                host.flags_mut().touched = true;
                if let Some(position) = input.primary_touch() {
                    host.activate(position);
                }
            }
            TouchActivation::LongTouch => {
                let position = input.primary_touch();
                let flags = host.flags_mut();
                flags.touched = true;
                flags.long_touch_start_ref = position.map(|p| p.coordinate_sum());
                host.clear_long_touch_timer();
                if let Some(position) = position {
                    host.start_long_touch_timer(position);
                }
            }
        }
    }

    pub fn touch_end<H: ActivationHost>(self, host: &mut H, input: &mut TouchInput) {
        tracing::trace!(mode = ?self, "touch end");
        match self {
            TouchActivation::Tap => tap_end(host, input),
            TouchActivation::DoubleTap => double_tap_end(host, input),
            TouchActivation::Touch => {
                input.suppress_default();
                host.flags_mut().touched = false;
                host.deactivate();
            }
            TouchActivation::LongTouch => {
                input.suppress_default();
                host.flags_mut().touched = false;
            }
        }
    }

    pub fn touch_move<H: ActivationHost>(self, host: &mut H, input: &mut TouchInput) {
        if self == TouchActivation::LongTouch && long_touch_exceeded(host, input) {
            host.clear_long_touch_timer();
            return;
        }
        follow_contact(host, input);
    }

    pub fn touch_cancel<H: ActivationHost>(self, host: &mut H) {
        tracing::trace!(mode = ?self, "touch cancel");
        host.deactivate();
    }
}

fn follow_contact<H: ActivationHost>(host: &mut H, input: &mut TouchInput) {
    if !host.is_active() {
        return;
    }
    input.suppress_default();
    if let Some(position) = input.primary_touch() {
        host.set_position(position, true);
    }
}

fn long_touch_exceeded<H: ActivationHost>(host: &H, input: &TouchInput) -> bool {
    let limit = host.move_limits().long_touch_move_limit;
    match (host.flags().long_touch_start_ref, input.primary_touch()) {
        (Some(start), Some(position)) => (start - position.coordinate_sum()).abs() > limit,
        _ => false,
    }
}

fn tap_end<H: ActivationHost>(host: &mut H, input: &mut TouchInput) {
    let flags = host.flags_mut();
    if flags.tap_timed_out {
        flags.tap_timed_out = false;
        return;
    }
    flags.touched = false;
    flags.tap_timed_out = false;
    host.clear_tap_timer();

    input.suppress_default();
    if let Some(position) = input.primary_changed_touch() {
        host.toggle_active(position);
    }
}

fn double_tap_end<H: ActivationHost>(host: &mut H, input: &mut TouchInput) {
    let flags = host.flags_mut();
    if !flags.tapped {
        if flags.tap_timed_out {
            flags.tap_timed_out = false;
            return;
        }
        flags.touched = false;
        flags.tapped = true;
        flags.tap_timed_out = false;
        flags.double_tap_timed_out = false;
        host.clear_tap_timer();
        host.start_double_tap_timer();
        return;
    }

    host.clear_tap_timer();
    host.clear_double_tap_timer();
    if !host.flags().double_tap_timed_out {
        if let Some(position) = input.primary_changed_touch() {
            host.toggle_active(position);
        }
    }
    let flags = host.flags_mut();
    flags.touched = false;
    flags.tapped = false;
}
