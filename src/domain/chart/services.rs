use super::value_objects::Tick;
use crate::domain::forecast::{MILLIS_PER_HOUR, TimeSeries, Timestamp};
use crate::time_utils::{DisplayZone, format_date_label, hour_of_day};

/// Hours whose tick also names the day
const DATE_HOURS: [u32; 2] = [6, 18];

/// Single-pass sequence of axis ticks over `[first, last]`.
///
/// Steps one hour at a time from `first` and yields only even wall-clock
/// hours, each read in the offset in effect at that instant.
#[derive(Debug, Clone)]
pub struct HourlyTicks<Z> {
    cursor: Timestamp,
    last: Timestamp,
    zone: Z,
}

impl<Z: DisplayZone> HourlyTicks<Z> {
    pub fn new(first: Timestamp, last: Timestamp, zone: Z) -> Self {
        Self { cursor: first, last, zone }
    }

    pub fn for_series(series: &TimeSeries, zone: Z) -> Self {
        Self::new(series.first_time(), series.last_time(), zone)
    }

    fn label(&self, at: Timestamp, hour: u32) -> String {
        let hour_label = format!("{:02}", hour);
        if DATE_HOURS.contains(&hour) {
            format!("{}<br><b>{}</b>", hour_label, format_date_label(at, self.zone))
        } else {
            hour_label
        }
    }
}

impl<Z: DisplayZone> Iterator for HourlyTicks<Z> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        while self.cursor <= self.last {
            let at = self.cursor;
            self.cursor = at.offset_by(MILLIS_PER_HOUR);

            let hour = hour_of_day(at, self.zone);
            if hour % 2 == 0 {
                return Some(Tick { time: at, label: self.label(at, hour) });
            }
        }
        None
    }
}

/// Build the complete tick list for a series
pub fn build_ticks<Z: DisplayZone>(series: &TimeSeries, zone: Z) -> Vec<Tick> {
    HourlyTicks::for_series(series, zone).collect()
}
