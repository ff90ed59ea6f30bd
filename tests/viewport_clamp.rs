use quickcheck_macros::quickcheck;
use wind_forecast_wasm::domain::chart::{FullRange, Viewport, ViewportSession};
use wind_forecast_wasm::domain::forecast::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, Timestamp};

const SPAN: i64 = 36 * MILLIS_PER_HOUR;
const PAD: i64 = 30 * MILLIS_PER_MINUTE;

/// 120 hourly samples starting at t=0, padded by half an hour
fn session() -> ViewportSession {
    let full = FullRange::padded(Timestamp::from_millis(0), Timestamp::from_millis(119 * MILLIS_PER_HOUR), PAD);
    ViewportSession::new(full, SPAN, MILLIS_PER_MINUTE as f64)
}

#[quickcheck]
fn clamp_is_idempotent(proposed: i64) -> bool {
    let s = session();
    let once = s.clamp(Timestamp::from_millis(proposed));
    s.clamp(once.start) == once
}

#[quickcheck]
fn clamp_stays_inside_full_range(proposed: i64) -> bool {
    let s = session();
    let vp = s.clamp(Timestamp::from_millis(proposed));
    let full = s.full_range();
    full.start <= vp.start && vp.start.offset_by(SPAN) <= full.end && vp.span() == SPAN
}

#[quickcheck]
fn pan_sequence_keeps_invariants(deltas: Vec<i32>) -> bool {
    let mut s = session();
    deltas.into_iter().all(|d| {
        let vp = s.pan_by(i64::from(d) * MILLIS_PER_MINUTE);
        s.full_range().contains(&vp) && vp.span() == SPAN && vp == s.viewport()
    })
}

#[test]
fn initial_window_is_first_slice() {
    let s = session();
    let start = Timestamp::from_millis(-PAD);
    assert_eq!(s.viewport(), Viewport::new(start, start.offset_by(SPAN)));
}

#[test]
fn start_before_range_snaps_to_padded_start() {
    let s = session();
    let full = s.full_range();
    for early in [1, MILLIS_PER_HOUR, 10 * MILLIS_PER_HOUR, 1000 * MILLIS_PER_HOUR] {
        assert_eq!(s.clamp(full.start.offset_by(-early)).start, full.start);
    }
}

#[test]
fn end_past_range_snaps_to_padded_end() {
    let s = session();
    let full = s.full_range();
    let latest = full.end.offset_by(-SPAN);
    for late in [1, MILLIS_PER_HOUR, 50 * MILLIS_PER_HOUR] {
        let vp = s.clamp(latest.offset_by(late));
        assert_eq!(vp.start, latest);
        assert_eq!(vp.end, full.end);
    }
}

#[test]
fn interior_start_passes_through() {
    let s = session();
    let proposed = Timestamp::from_millis(24 * MILLIS_PER_HOUR);
    assert_eq!(s.clamp(proposed), Viewport::starting_at(proposed, SPAN));
}

#[test]
fn clamp_does_not_mutate() {
    let s = session();
    let before = s.viewport();
    let _ = s.clamp(Timestamp::from_millis(50 * MILLIS_PER_HOUR));
    assert_eq!(s.viewport(), before);
}

#[test]
fn short_series_pins_window_to_full_range() {
    let full = FullRange::padded(Timestamp::from_millis(0), Timestamp::from_millis(11 * MILLIS_PER_HOUR), PAD);
    let mut s = ViewportSession::new(full, SPAN, MILLIS_PER_MINUTE as f64);

    assert_eq!(s.span(), 12 * MILLIS_PER_HOUR);
    assert_eq!(s.viewport(), Viewport::new(full.start, full.end));
    assert_eq!(s.pan_by(5 * MILLIS_PER_HOUR), Viewport::new(full.start, full.end));
    assert_eq!(s.pan_by(-5 * MILLIS_PER_HOUR), Viewport::new(full.start, full.end));
}

#[test]
fn exact_fit_series_allows_no_movement() {
    // 35 hours of data plus two half-hour pads is exactly one window
    let full = FullRange::padded(Timestamp::from_millis(0), Timestamp::from_millis(35 * MILLIS_PER_HOUR), PAD);
    let mut s = ViewportSession::new(full, SPAN, MILLIS_PER_MINUTE as f64);
    assert_eq!(s.span(), SPAN);
    assert_eq!(s.pan_by(MILLIS_PER_HOUR), Viewport::new(full.start, full.end));
}
