use serde_json::json;
use wind_forecast_wasm::domain::chart::{FullRange, RelayoutOutcome, Viewport, ViewportChanged, ViewportSession};
use wind_forecast_wasm::domain::forecast::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, Timestamp};
use wind_forecast_wasm::infrastructure::rendering::parse_relayout;
use wind_forecast_wasm::time_utils::{parse_timestamp, utc_offset};

const SPAN: i64 = 36 * MILLIS_PER_HOUR;

fn ts(raw: &str) -> Timestamp {
    parse_timestamp(raw, utc_offset()).unwrap()
}

/// 120 hourly samples from 2025-03-01T00:00Z
fn session() -> ViewportSession {
    let first = ts("2025-03-01T00:00:00Z");
    let full = FullRange::padded(first, first.offset_by(119 * MILLIS_PER_HOUR), 30 * MILLIS_PER_MINUTE);
    ViewportSession::new(full, SPAN, MILLIS_PER_MINUTE as f64)
}

#[test]
fn drag_past_left_edge_is_forced_back() {
    let mut s = session();
    let full = s.full_range();
    let dragged = full.start.offset_by(-10 * MILLIS_PER_HOUR);

    let outcome = s.handle_relayout(ViewportChanged::new(Some(dragged), Some(dragged.offset_by(SPAN))));

    let expected = Viewport::new(full.start, full.start.offset_by(SPAN));
    assert_eq!(outcome, RelayoutOutcome::Corrected(expected));
    assert_eq!(s.viewport(), expected);
}

#[test]
fn drag_past_right_edge_is_forced_back() {
    let mut s = session();
    let full = s.full_range();
    let dragged = full.end.offset_by(-SPAN + 3 * MILLIS_PER_HOUR);

    let outcome = s.handle_relayout(ViewportChanged::starting_at(dragged));
    assert_eq!(outcome, RelayoutOutcome::Corrected(Viewport::new(full.end.offset_by(-SPAN), full.end)));
}

#[test]
fn interior_drag_is_accepted() {
    let mut s = session();
    let start = ts("2025-03-02T06:00:00Z");
    let outcome = s.handle_relayout(ViewportChanged::new(Some(start), Some(start.offset_by(SPAN))));
    assert_eq!(outcome, RelayoutOutcome::Accepted(Viewport::starting_at(start, SPAN)));
}

#[test]
fn width_change_is_corrected_even_inside_range() {
    let mut s = session();
    let start = ts("2025-03-02T06:00:00Z");
    let outcome = s.handle_relayout(ViewportChanged::new(Some(start), Some(start.offset_by(SPAN / 2))));
    assert_eq!(outcome, RelayoutOutcome::Corrected(Viewport::starting_at(start, SPAN)));
}

#[test]
fn event_without_range_changes_nothing() {
    let mut s = session();
    let before = s.viewport();
    assert_eq!(s.handle_relayout(ViewportChanged::default()), RelayoutOutcome::Ignored);
    assert_eq!(s.viewport(), before);
}

#[test]
fn parses_indexed_range_keys() {
    let payload = json!({
        "xaxis.range[0]": "2025-03-01 06:00:00.000",
        "xaxis.range[1]": "2025-03-02 18:00:00.000"
    });
    let changed = parse_relayout(&payload, utc_offset());
    assert_eq!(changed.new_start, Some(ts("2025-03-01T06:00:00Z")));
    assert_eq!(changed.new_end, Some(ts("2025-03-02T18:00:00Z")));
}

#[test]
fn parses_range_array_and_numbers() {
    let start = ts("2025-03-01T06:00:00Z");
    let payload = json!({ "xaxis.range": [start.value(), "2025-03-02 18:00"] });
    let changed = parse_relayout(&payload, utc_offset());
    assert_eq!(changed.new_start, Some(start));
    assert_eq!(changed.new_end, Some(ts("2025-03-02T18:00:00Z")));
}

#[test]
fn unrelated_payload_has_no_start() {
    let payload = json!({ "autosize": true, "yaxis.range[0]": 0 });
    assert_eq!(parse_relayout(&payload, utc_offset()), ViewportChanged::default());
}

#[test]
fn parsed_drag_clamps_end_to_end() {
    let mut s = session();
    let payload = json!({
        "xaxis.range[0]": "2025-02-28 14:00:00",
        "xaxis.range[1]": "2025-03-02 02:00:00"
    });
    let outcome = s.handle_relayout(parse_relayout(&payload, utc_offset()));

    let start = ts("2025-02-28T23:30:00Z");
    assert_eq!(outcome, RelayoutOutcome::Corrected(Viewport::starting_at(start, SPAN)));
}
