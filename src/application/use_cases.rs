use std::cell::Cell;

use leptos::{RwSignal, SignalGetUntracked, SignalSet};

use crate::config::AppConfig;
use crate::domain::chart::ViewportSession;
use crate::domain::errors::AppError;
use crate::domain::forecast::{ForecastRepository, ForecastRequest, TimeSeries};
use crate::domain::location::Point;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info, log_warn};

/// Flag backing the trigger control: engaged while a request is in flight.
pub trait TriggerLock {
    fn is_engaged(&self) -> bool;
    fn set_engaged(&self, engaged: bool);
}

impl TriggerLock for Cell<bool> {
    fn is_engaged(&self) -> bool {
        self.get()
    }

    fn set_engaged(&self, engaged: bool) {
        self.set(engaged);
    }
}

impl TriggerLock for RwSignal<bool> {
    fn is_engaged(&self) -> bool {
        self.get_untracked()
    }

    fn set_engaged(&self, engaged: bool) {
        self.set(engaged);
    }
}

/// Holds the trigger locked until dropped, whichever way the request ends.
pub struct LockGuard<'a, L: TriggerLock + ?Sized> {
    lock: &'a L,
}

impl<'a, L: TriggerLock + ?Sized> LockGuard<'a, L> {
    pub fn engage(lock: &'a L) -> Self {
        lock.set_engaged(true);
        Self { lock }
    }
}

impl<L: TriggerLock + ?Sized> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.set_engaged(false);
    }
}

/// Freshly fetched series with its own viewport
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedForecast {
    pub series: TimeSeries,
    pub session: ViewportSession,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(LoadedForecast),
    /// A request was already in flight
    Skipped,
}

/// Use Case: fetch the forecast for the point in the coordinate fields
pub struct FetchForecastUseCase<R: ForecastRepository> {
    repository: R,
    config: AppConfig,
}

impl<R: ForecastRepository> FetchForecastUseCase<R> {
    pub fn new(repository: R, config: AppConfig) -> Self {
        Self { repository, config }
    }

    /// Validate the fields, then fetch with the trigger locked. Invalid input
    /// fails before the lock is touched.
    pub async fn execute<L: TriggerLock + ?Sized>(
        &self,
        lat_field: &str,
        lon_field: &str,
        lock: &L,
    ) -> Result<FetchOutcome, AppError> {
        if lock.is_engaged() {
            log_debug!(LogComponent::Application("FetchForecast"), "Request already in flight, skipping");
            return Ok(FetchOutcome::Skipped);
        }

        let point = Point::from_fields(lat_field, lon_field).inspect_err(|_| {
            log_warn!(
                LogComponent::Application("FetchForecast"),
                "Rejected coordinate fields '{}', '{}'",
                lat_field,
                lon_field
            );
        })?;

        let _guard = LockGuard::engage(lock);
        let request = ForecastRequest::new(point, self.config.horizon_hours);
        log_info!(
            LogComponent::Application("FetchForecast"),
            "📡 Requesting {}h forecast for {:.5}, {:.5}",
            request.hours,
            request.lat,
            request.lon
        );

        let series = self.repository.fetch_forecast(&request).await?;
        let session = ViewportSession::from_series(&series, &self.config.viewport);
        log_info!(
            LogComponent::Application("FetchForecast"),
            "✅ Loaded {} samples",
            series.len()
        );

        Ok(FetchOutcome::Loaded(LoadedForecast { series, session }))
    }
}
