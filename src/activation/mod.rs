//! Gesture recognisers that turn pointer input into activation changes.
//!
//! Each mode is a stateless set of handlers: all bookkeeping lives on the
//! [`ActivationHost`](crate::host::ActivationHost) passed in by the caller.

pub mod mouse;
pub mod touch;

pub use mouse::MouseActivation;
pub use touch::TouchActivation;
