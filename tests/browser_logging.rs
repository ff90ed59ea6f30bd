#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wind_forecast_wasm::domain::forecast::Timestamp;
use wind_forecast_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger};
use wind_forecast_wasm::infrastructure::services::ConsoleLogger;
use wind_forecast_wasm::time_utils::{BrowserZone, DisplayZone, hour_of_day};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new_development();
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        logger.log(LogEntry::new(level, LogComponent::Infrastructure("Test"), "browser console"));
    }
}

#[wasm_bindgen_test]
fn browser_zone_matches_date_hours() {
    // Samples across a year so any daylight saving change is included
    for day in 0..365_i64 {
        let ms = 1_735_689_600_000 + day * 86_400_000 + 13 * 3_600_000;
        let date = js_sys::Date::new(&(ms as f64).into());
        let offset = BrowserZone.offset_at(Timestamp::from_millis(ms));
        assert_eq!(offset.local_minus_utc() % 60, 0);
        assert_eq!(hour_of_day(Timestamp::from_millis(ms), BrowserZone), date.get_hours());
    }
}
