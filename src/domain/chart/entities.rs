use super::value_objects::{FullRange, RelayoutOutcome, Viewport, ViewportChanged, WheelInput, WheelOutcome};
use crate::config::ViewportConfig;
use crate::domain::forecast::{TimeSeries, Timestamp};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// Fixed-width window panning inside the padded range of one series.
///
/// Every mutation goes through [`ViewportSession::pan_to`], so after any call
/// `full.start <= viewport.start`, `viewport.end <= full.end` and
/// `viewport.span() == span()` hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSession {
    full: FullRange,
    span: i64,
    pan_ms_per_pixel: f64,
    viewport: Viewport,
}

impl ViewportSession {
    /// Start at the left edge of `full`. A range narrower than `requested_span`
    /// shrinks the span to the whole range, which pins the view in place.
    pub fn new(full: FullRange, requested_span: i64, pan_ms_per_pixel: f64) -> Self {
        let width = full.width().max(0);
        let span = if width < requested_span {
            log_warn!(
                LogComponent::Domain("Viewport"),
                "Series covers {}ms, narrower than the {}ms window; panning disabled",
                width,
                requested_span
            );
            width
        } else {
            requested_span
        };

        Self {
            full,
            span,
            pan_ms_per_pixel,
            viewport: Viewport::starting_at(full.start, span),
        }
    }

    pub fn from_series(series: &TimeSeries, config: &ViewportConfig) -> Self {
        let full = FullRange::padded(series.first_time(), series.last_time(), config.padding_ms());
        Self::new(full, config.span_ms(), config.pan_ms_per_pixel())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn full_range(&self) -> FullRange {
        self.full
    }

    pub fn span(&self) -> i64 {
        self.span
    }

    /// Window of fixed width starting as close to `proposed_start` as the
    /// full range allows. The left edge wins when both would be violated.
    pub fn clamp(&self, proposed_start: Timestamp) -> Viewport {
        let proposed = Viewport::starting_at(proposed_start, self.span);
        if proposed.start < self.full.start {
            Viewport::starting_at(self.full.start, self.span)
        } else if proposed.end > self.full.end {
            Viewport::new(self.full.end.offset_by(-self.span), self.full.end)
        } else {
            proposed
        }
    }

    /// Clamp and apply. The only place the viewport changes.
    pub fn pan_to(&mut self, proposed_start: Timestamp) -> Viewport {
        self.viewport = self.clamp(proposed_start);
        self.viewport
    }

    pub fn pan_by(&mut self, delta: i64) -> Viewport {
        self.pan_to(self.viewport.start.offset_by(delta))
    }

    pub fn handle_wheel(&mut self, input: WheelInput) -> WheelOutcome {
        let Some(pixels) = input.horizontal_delta() else {
            return WheelOutcome::Ignored;
        };
        let delta = (pixels * self.pan_ms_per_pixel).round() as i64;
        WheelOutcome::Panned(self.pan_by(delta))
    }

    /// Re-clamp the window the engine reports. A report without a start
    /// leaves the session alone.
    pub fn handle_relayout(&mut self, event: ViewportChanged) -> RelayoutOutcome {
        let Some(reported_start) = event.new_start else {
            return RelayoutOutcome::Ignored;
        };

        let applied = self.pan_to(reported_start);
        let reported_end = event.new_end.unwrap_or_else(|| reported_start.offset_by(self.span));

        if applied.start == reported_start && applied.end == reported_end {
            RelayoutOutcome::Accepted(applied)
        } else {
            log_debug!(
                LogComponent::Domain("Viewport"),
                "Engine showed [{}, {}], forcing [{}, {}]",
                reported_start,
                reported_end,
                applied.start,
                applied.end
            );
            RelayoutOutcome::Corrected(applied)
        }
    }
}
