use crate::events::MouseInput;
use crate::host::ActivationHost;
use serde::{Deserialize, Serialize};

/// How a mouse engages the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseActivation {
    /// A press and release without much movement toggles activation.
    #[default]
    Click,
    /// The platform double-click toggles activation.
    DoubleClick,
    /// Entering the element activates, leaving it deactivates.
    Hover,
    /// Active only while the button is held.
    MouseDown,
}

impl MouseActivation {
    pub fn mouse_down<H: ActivationHost>(self, host: &mut H, input: &MouseInput) {
        tracing::trace!(mode = ?self, x = input.client_x, y = input.client_y, "mouse down");
        match self {
            MouseActivation::Click => {
                let flags = host.flags_mut();
                flags.mouse_down = true;
                flags.click_move_start_ref = Some(input.position().coordinate_sum());
            }
            MouseActivation::DoubleClick | MouseActivation::Hover => {
                host.flags_mut().mouse_down = true;
            }
            MouseActivation::MouseDown => host.activate(input.position()),
        }
    }

    pub fn mouse_up<H: ActivationHost>(self, host: &mut H, input: &MouseInput) {
        tracing::trace!(mode = ?self, x = input.client_x, y = input.client_y, "mouse up");
        match self {
            MouseActivation::Click => click_release(host, input),
            MouseActivation::DoubleClick | MouseActivation::Hover => {
                host.flags_mut().mouse_down = false;
            }
            MouseActivation::MouseDown => host.deactivate(),
        }
    }

    pub fn mouse_move<H: ActivationHost>(self, host: &mut H, input: &MouseInput) {
        let position = input.position();
        match self {
            MouseActivation::Hover => {
                if host.is_active() {
                    host.set_position(position, true);
                } else {
                    host.activate(position);
                }
            }
            _ => {
                if host.is_active() {
                    host.set_position(position, true);
                } else {
                    host.set_passive_position(position);
                }
            }
        }
    }

    /// Only hover mode reacts to the pointer entering the element.
    pub fn mouse_enter<H: ActivationHost>(self, host: &mut H, input: &MouseInput) {
        if self == MouseActivation::Hover {
            host.activate(input.position());
        }
    }

    pub fn mouse_leave<H: ActivationHost>(self, host: &mut H) {
        tracing::trace!(mode = ?self, "mouse leave");
        match self {
            MouseActivation::Click | MouseActivation::DoubleClick => {
                host.flags_mut().mouse_down = false;
            }
            MouseActivation::Hover => {
                host.flags_mut().mouse_down = false;
                if host.is_active() {
                    host.deactivate();
                }
            }
            MouseActivation::MouseDown => {
                if host.is_active() {
                    host.deactivate();
                }
            }
        }
    }

    /// Only double-click mode reacts to the platform double-click.
    pub fn double_click<H: ActivationHost>(self, host: &mut H, input: &MouseInput) {
        if self == MouseActivation::DoubleClick {
            host.toggle_active(input.position());
        }
    }
}

fn click_release<H: ActivationHost>(host: &mut H, input: &MouseInput) {
    let limit = host.move_limits().click_move_limit;
    let flags = host.flags_mut();
    if !flags.mouse_down {
        return;
    }
    flags.mouse_down = false;

    let position = input.position();
    let Some(start) = flags.click_move_start_ref else {
        return;
    };
    let moved = (start - position.coordinate_sum()).abs();
    if moved <= limit {
        host.toggle_active(position);
    } else {
        tracing::trace!(moved, limit, "release treated as drag");
    }
}
