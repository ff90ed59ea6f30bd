pub mod dto;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo::net::http::Request;

use crate::domain::errors::{AppError, NetworkError};
use crate::domain::forecast::{ForecastRepository, ForecastRequest, TimeSeries};
use crate::domain::logging::LogComponent;
use crate::time_utils::BrowserZone;
use crate::{log_debug, log_error};
use dto::{ErrorBody, ForecastResponse, failure_message};

/// HTTP client for the forecast endpoint
#[derive(Clone, Debug)]
pub struct ForecastHttpClient {
    endpoint: String,
}

impl ForecastHttpClient {
    /// Timestamps the service sends without an offset are read in the browser's zone.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    async fn post_forecast(&self, request: &ForecastRequest) -> Result<TimeSeries, AppError> {
        log_debug!(
            LogComponent::Infrastructure("ForecastHttpClient"),
            "POST {} {:?}",
            self.endpoint,
            request
        );

        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| NetworkError::TransportFailed(format!("Failed to encode request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| NetworkError::TransportFailed(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response.json::<ErrorBody>().await.ok();
            let message = failure_message(status, body);
            log_error!(
                LogComponent::Infrastructure("ForecastHttpClient"),
                "❌ HTTP {}: {}",
                status,
                message
            );
            return Err(NetworkError::RequestFailed { status, message }.into());
        }

        let dto: ForecastResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::ResponseDecodeFailed(format!("Failed to parse JSON: {:?}", e)))?;

        Ok(dto.into_series(BrowserZone)?)
    }
}

impl ForecastRepository for ForecastHttpClient {
    fn fetch_forecast<'a>(&'a self, request: &'a ForecastRequest) -> LocalBoxFuture<'a, Result<TimeSeries, AppError>> {
        self.post_forecast(request).boxed_local()
    }
}
