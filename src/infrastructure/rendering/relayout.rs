use serde_json::Value;

use crate::domain::chart::ViewportChanged;
use crate::domain::forecast::Timestamp;
use crate::time_utils::{DisplayZone, parse_timestamp};

/// Read the time axis range out of a relayout payload.
///
/// The engine reports either `xaxis.range[0]` / `xaxis.range[1]` keys or a
/// two-element `xaxis.range` array; values are date strings or epoch millis.
pub fn parse_relayout<Z: DisplayZone>(payload: &Value, zone: Z) -> ViewportChanged {
    let bound = |index: usize| {
        payload
            .get(format!("xaxis.range[{}]", index))
            .or_else(|| payload.get("xaxis.range").and_then(|range| range.get(index)))
            .and_then(|value| axis_value(value, zone))
    };
    ViewportChanged::new(bound(0), bound(1))
}

fn axis_value<Z: DisplayZone>(value: &Value, zone: Z) -> Option<Timestamp> {
    match value {
        Value::String(raw) => parse_timestamp(raw, zone).ok(),
        Value::Number(number) => number.as_f64().map(|ms| Timestamp::from_millis(ms.round() as i64)),
        _ => None,
    }
}
