use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of both coordinates. Used as the baseline scalar for move limits.
    pub fn coordinate_sum(self) -> f64 {
        self.x + self.y
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Bounds for an item position. `None` leaves that side unconstrained and a
/// negative max is read as an offset from the far edge of the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
}

impl Limits {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
        }
    }
}

/// Linearly rescale `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// A degenerate source range produces a non-finite result, see
/// [`checked_convert_range`] for the guarded variant.
pub fn convert_range(old_min: f64, old_max: f64, new_min: f64, new_max: f64, value: f64) -> f64 {
    let percent = (value - old_min) / (old_max - old_min);
    percent * (new_max - new_min) + new_min
}

pub fn checked_convert_range(
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
    value: f64,
) -> Option<f64> {
    if old_max == old_min {
        return None;
    }
    Some(convert_range(old_min, old_max, new_min, new_max, value))
}

pub fn limit_position(limits: &Limits, position: Point) -> Point {
    Point {
        x: limit_axis(limits.min_x, limits.max_x, position.x),
        y: limit_axis(limits.min_y, limits.max_y, position.y),
    }
}

fn limit_axis(min: Option<f64>, max: Option<f64>, value: f64) -> f64 {
    match (min, max) {
        (Some(min), _) if value < min => min,
        (_, Some(max)) if value > max => max,
        _ => value,
    }
}

pub fn create_adjusted_limits(
    limits: Limits,
    elem: Dimensions,
    item: Dimensions,
    limit_by_size: bool,
    internal: bool,
) -> Limits {
    let mut adjusted = limits;

    if let Some(max_x) = adjusted.max_x.filter(|max| *max < 0.0) {
        adjusted.max_x = Some(elem.width + max_x);
    }
    if let Some(max_y) = adjusted.max_y.filter(|max| *max < 0.0) {
        adjusted.max_y = Some(elem.height + max_y);
    }

    if !limit_by_size {
        return adjusted;
    }

    if internal {
        adjusted.min_x = Some(0.0);
        adjusted.min_y = Some(0.0);
        if item.width > elem.width || item.height > elem.height {
            adjusted.max_x = Some(0.0);
            adjusted.max_y = Some(0.0);
        } else {
            adjusted.max_x = Some(elem.width - item.width);
            adjusted.max_y = Some(elem.height - item.height);
        }
    } else if !item.is_empty() {
        adjusted.max_x = Some(0.0);
        adjusted.max_y = Some(0.0);
        if item.width < elem.width || item.height < elem.height {
            adjusted.min_x = Some(0.0);
            adjusted.min_y = Some(0.0);
        } else {
            adjusted.min_x = Some(elem.width - item.width);
            adjusted.min_y = Some(elem.height - item.height);
        }
    }

    adjusted
}

/// Displace `item_position` by the drag delta between two active positions.
/// A negative `multiplier` inverts the movement.
pub fn calculate_item_position(
    item_position: Point,
    prev_active_position: Point,
    active_position: Point,
    multiplier: f64,
) -> Point {
    Point {
        x: item_position.x + (active_position.x - prev_active_position.x) * multiplier,
        y: item_position.y + (active_position.y - prev_active_position.y) * multiplier,
    }
}

pub fn align_item_on_position(elem: Dimensions, item: Dimensions, position: Point) -> Point {
    Point {
        x: convert_range(0.0, elem.width, 0.0, elem.width - item.width, position.x),
        y: convert_range(0.0, elem.height, 0.0, elem.height - item.height, position.y),
    }
}

/// Like [`align_item_on_position`], but brings the point under `position` to
/// the center of the container.
pub fn center_item_on_position(elem: Dimensions, item: Dimensions, position: Point) -> Point {
    let aligned = align_item_on_position(elem, item, position);
    Point {
        x: aligned.x + elem.width / 2.0 - position.x,
        y: aligned.y + elem.height / 2.0 - position.y,
    }
}
