use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use wind_forecast_wasm::application::{FetchForecastUseCase, FetchOutcome, TriggerLock};
use wind_forecast_wasm::config::AppConfig;
use wind_forecast_wasm::domain::chart::{RelayoutOutcome, Viewport, ViewportChanged};
use wind_forecast_wasm::domain::errors::{AppError, MISSING_POINT_MESSAGE, NetworkError};
use wind_forecast_wasm::domain::forecast::{
    ForecastRepository, ForecastRequest, MILLIS_PER_HOUR, TimeSeries, Timestamp, WindUnit,
};

/// Repository that records requests and whether the trigger was locked meanwhile
struct FakeRepository {
    lock: Rc<Cell<bool>>,
    requests: RefCell<Vec<ForecastRequest>>,
    locked_during_fetch: Cell<bool>,
    fail_with: Option<AppError>,
}

impl FakeRepository {
    fn new(lock: Rc<Cell<bool>>) -> Self {
        Self { lock, requests: RefCell::new(Vec::new()), locked_during_fetch: Cell::new(false), fail_with: None }
    }

    fn failing(lock: Rc<Cell<bool>>, error: AppError) -> Self {
        Self { fail_with: Some(error), ..Self::new(lock) }
    }
}

fn hourly(count: usize) -> TimeSeries {
    let time: Vec<Timestamp> = (0..count as i64).map(|h| Timestamp::from_millis(h * MILLIS_PER_HOUR)).collect();
    TimeSeries::from_columns(time, vec![8.0; count], vec![None; count], vec![Some(90.0); count], WindUnit::Knots)
        .unwrap()
}

impl ForecastRepository for FakeRepository {
    fn fetch_forecast<'a>(&'a self, request: &'a ForecastRequest) -> LocalBoxFuture<'a, Result<TimeSeries, AppError>> {
        async move {
            self.locked_during_fetch.set(self.lock.is_engaged());
            self.requests.borrow_mut().push(*request);
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(hourly(request.hours as usize)),
            }
        }
        .boxed_local()
    }
}

#[test]
fn loads_series_and_releases_lock() {
    let lock = Rc::new(Cell::new(false));
    let use_case = FetchForecastUseCase::new(FakeRepository::new(lock.clone()), AppConfig::default());

    let outcome = block_on(use_case.execute("41.52310", "-71.34230", &*lock)).unwrap();

    let FetchOutcome::Loaded(loaded) = outcome else {
        panic!("expected a loaded forecast");
    };
    assert_eq!(loaded.series.len(), 120);
    assert_eq!(loaded.session.span(), 36 * MILLIS_PER_HOUR);
    assert!(!lock.get());
}

#[test]
fn request_carries_point_and_horizon() {
    let lock = Rc::new(Cell::new(false));
    let repo = FakeRepository::new(lock.clone());
    let config = AppConfig { horizon_hours: 48, ..AppConfig::default() };
    let use_case = FetchForecastUseCase::new(&repo, config);

    block_on(use_case.execute(" 41.5231 ", "-71.3423", &*lock)).unwrap();

    assert!(repo.locked_during_fetch.get());
    assert_eq!(*repo.requests.borrow(), vec![ForecastRequest { lat: 41.5231, lon: -71.3423, hours: 48 }]);
}

#[test]
fn invalid_fields_never_reach_the_service() {
    let lock = Rc::new(Cell::new(false));
    let repo = FakeRepository::new(lock.clone());
    let use_case = FetchForecastUseCase::new(&repo, AppConfig::default());

    for (lat, lon) in [("", "-71.3"), ("abc", "-71.3"), ("41.5", ""), ("NaN", "1"), ("41.5", "inf")] {
        let err = block_on(use_case.execute(lat, lon, &*lock)).unwrap_err();
        assert_eq!(err.user_message(), MISSING_POINT_MESSAGE);
        assert!(!lock.get());
    }
    assert!(repo.requests.borrow().is_empty());
}

#[test]
fn failure_releases_lock_and_keeps_server_message() {
    let lock = Rc::new(Cell::new(false));
    let error: AppError =
        NetworkError::RequestFailed { status: 502, message: "Upstream model unavailable".to_string() }.into();
    let repo = FakeRepository::failing(lock.clone(), error);
    let use_case = FetchForecastUseCase::new(&repo, AppConfig::default());

    let err = block_on(use_case.execute("41.5", "-71.3", &*lock)).unwrap_err();

    assert_eq!(err.user_message(), "Upstream model unavailable");
    assert!(repo.locked_during_fetch.get());
    assert!(!lock.get());
}

#[test]
fn engaged_lock_skips_the_request() {
    let lock = Rc::new(Cell::new(true));
    let repo = FakeRepository::new(lock.clone());
    let use_case = FetchForecastUseCase::new(&repo, AppConfig::default());

    let outcome = block_on(use_case.execute("41.5", "-71.3", &*lock)).unwrap();

    assert_eq!(outcome, FetchOutcome::Skipped);
    assert!(repo.requests.borrow().is_empty());
    assert!(lock.get());
}

#[test]
fn fetched_session_snaps_early_relayout_to_padded_start() {
    let lock = Rc::new(Cell::new(false));
    let use_case = FetchForecastUseCase::new(FakeRepository::new(lock.clone()), AppConfig::default());

    let FetchOutcome::Loaded(mut loaded) = block_on(use_case.execute("41.52310", "-71.34230", &*lock)).unwrap() else {
        panic!("expected a loaded forecast");
    };
    let full = loaded.session.full_range();
    assert_eq!(loaded.series.len(), 120);
    assert_eq!(full.start, Timestamp::from_millis(-30 * 60 * 1000));

    let outcome = loaded
        .session
        .handle_relayout(ViewportChanged::starting_at(full.start.offset_by(-10 * MILLIS_PER_HOUR)));

    let expected = Viewport::new(full.start, full.start.offset_by(36 * MILLIS_PER_HOUR));
    assert_eq!(outcome, RelayoutOutcome::Corrected(expected));
    assert_eq!(loaded.session.viewport(), expected);
}
