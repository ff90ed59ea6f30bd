use futures::future::LocalBoxFuture;

use super::{ForecastRequest, TimeSeries};
use crate::domain::errors::AppError;

/// Source of forecast series for a point
pub trait ForecastRepository {
    fn fetch_forecast<'a>(&'a self, request: &'a ForecastRequest) -> LocalBoxFuture<'a, Result<TimeSeries, AppError>>;
}

impl<R: ForecastRepository + ?Sized> ForecastRepository for &R {
    fn fetch_forecast<'a>(&'a self, request: &'a ForecastRequest) -> LocalBoxFuture<'a, Result<TimeSeries, AppError>> {
        (**self).fetch_forecast(request)
    }
}
