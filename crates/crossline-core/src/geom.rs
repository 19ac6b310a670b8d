use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snaps both coordinates to the nearest whole pixel. Halves round up, so -2.5 becomes -2.
    pub fn rounded(self) -> Self {
        Self::new(round_half_up(self.x), round_half_up(self.y))
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn round_half_up(v: f64) -> f64 {
    // `+ 0.0` folds a negative zero into zero.
    (v + 0.5).floor() + 0.0
}

/// A straight stroke between two clicks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Both clicks landed on the same spot. Still a valid segment.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        bounds.include_point(self.start);
        bounds.include_point(self.end);
        bounds
    }

    /// Whether `p` lies on the drawn extent of the stroke, within `tolerance`.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        if !self.bounds().expand(tolerance).contains(p) {
            return false;
        }
        let len = self.length();
        if len == 0.0 {
            return self.start.distance_to(p) <= tolerance;
        }
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let cross = dx * (p.y - self.start.y) - dy * (p.x - self.start.x);
        cross.abs() / len <= tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn include_point(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn expand(&self, delta: f64) -> Self {
        Self {
            min: Point::new(self.min.x - delta, self.min.y - delta),
            max: Point::new(self.max.x + delta, self.max.y + delta),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
