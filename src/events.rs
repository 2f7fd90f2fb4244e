//! Raw pointer input as delivered by the embedding UI layer.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl MouseInput {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// A touch event. Only the first contact of each list is ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchInput {
    #[serde(default)]
    pub touches: Vec<Point>,
    #[serde(default)]
    pub changed_touches: Vec<Point>,
    #[serde(default)]
    pub cancelable: bool,
    #[serde(skip)]
    default_prevented: bool,
}

impl TouchInput {
    /// A cancelable event whose single contact is both active and changed.
    pub fn at(x: f64, y: f64) -> Self {
        let contact = Point::new(x, y);
        Self {
            touches: vec![contact],
            changed_touches: vec![contact],
            cancelable: true,
            default_prevented: false,
        }
    }

    /// An event carrying no contacts at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn primary_touch(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    pub fn primary_changed_touch(&self) -> Option<Point> {
        self.changed_touches.first().copied()
    }

    /// Suppress the platform default, but only when the event allows it.
    pub fn suppress_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
