use crate::domain::forecast::Timestamp;

/// Value Object - visible slice of the time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Viewport {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Window of `span` milliseconds starting at `start`
    pub fn starting_at(start: Timestamp, span: i64) -> Self {
        Self { start, end: start.offset_by(span) }
    }

    pub fn span(&self) -> i64 {
        self.end.millis_since(self.start)
    }
}

/// Value Object - padded extent of the loaded series, the bound for panning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl FullRange {
    /// `[first - padding, last + padding]`
    pub fn padded(first: Timestamp, last: Timestamp, padding: i64) -> Self {
        Self {
            start: first.offset_by(-padding),
            end: last.offset_by(padding),
        }
    }

    pub fn width(&self) -> i64 {
        self.end.millis_since(self.start)
    }

    pub fn contains(&self, viewport: &Viewport) -> bool {
        self.start <= viewport.start && viewport.end <= self.end
    }
}

/// Wheel or trackpad gesture over the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub shift: bool,
}

impl WheelInput {
    pub fn new(delta_x: f64, delta_y: f64, shift: bool) -> Self {
        Self { delta_x, delta_y, shift }
    }

    /// Horizontal pan distance in pixels, if this gesture pans at all.
    ///
    /// A mostly vertical gesture only pans with Shift held, for mice without
    /// a horizontal wheel.
    pub fn horizontal_delta(&self) -> Option<f64> {
        if self.delta_x.abs() < self.delta_y.abs() {
            self.shift.then_some(self.delta_y)
        } else {
            Some(self.delta_x)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Not a pan; default scrolling must proceed.
    Ignored,
    /// Consumed; default scrolling must be suppressed and the chart moved.
    Panned(Viewport),
}

/// Typed relayout notification from the chart engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportChanged {
    pub new_start: Option<Timestamp>,
    pub new_end: Option<Timestamp>,
}

impl ViewportChanged {
    pub fn new(new_start: Option<Timestamp>, new_end: Option<Timestamp>) -> Self {
        Self { new_start, new_end }
    }

    pub fn starting_at(start: Timestamp) -> Self {
        Self { new_start: Some(start), new_end: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayoutOutcome {
    /// Event did not touch the time axis range
    Ignored,
    /// Engine already shows the clamped window
    Accepted(Viewport),
    /// Engine must be forced back to this window
    Corrected(Viewport),
}

/// Axis tick with its rendered label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub time: Timestamp,
    pub label: String,
}

impl Tick {
    /// Ticks at 06 and 18 carry the date on a second line.
    pub fn has_date(&self) -> bool {
        self.label.contains("<br>")
    }
}
