// ── Pointer → normalized offset ──

/// Axis-aligned bounding box of a hovered element, in the same units as
/// the pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

/// Pointer position relative to an element's centre, each axis in
/// `[-0.5, 0.5]`. `(0, 0)` is the neutral, untilted state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Normalize one axis. Degenerate extents map to the centre.
fn normalize(pos: f64, start: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() || !pos.is_finite() {
        return 0.0;
    }
    ((pos - start) / extent - 0.5).clamp(-0.5, 0.5)
}

/// Tracks the pointer over a single element.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    offset: PointerOffset,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move over `bounds` and return the new offset.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, bounds: Bounds) -> PointerOffset {
        self.offset = PointerOffset {
            x: normalize(x, bounds.left, bounds.width),
            y: normalize(y, bounds.top, bounds.height),
        };
        self.offset
    }

    /// The pointer left the element: back to neutral.
    pub fn on_pointer_leave(&mut self) {
        self.offset = PointerOffset::NEUTRAL;
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }
}
