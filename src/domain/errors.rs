use std::fmt::{Display, Formatter, Result as FmtResult};

/// Message shown when the coordinate fields do not hold a usable point.
pub const MISSING_POINT_MESSAGE: &str = "Click the map to select a point first.";

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(DomainError),
    Application(ApplicationError),
    Infrastructure(InfrastructureError),
}

/// Domain layer specific errors
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Validation(ValidationError),
}

/// Validation errors raised before data enters the domain model
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingPoint,
    EmptySeries,
    MisalignedSeries { field: &'static str, expected: usize, actual: usize },
    UnsortedSeries { index: usize },
    InvalidTimestamp(String),
}

/// Application layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    Configuration(ConfigurationError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidParameter(String),
    DeserializationFailed(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
    External(ExternalServiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Server answered with a failure status
    RequestFailed { status: u16, message: String },
    /// Request never produced a response
    TransportFailed(String),
    ResponseDecodeFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExternalServiceError {
    MapWidget(String),
    ChartEngine(String),
    BrowserApi(String),
}

impl AppError {
    /// Text for the blocking alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(DomainError::Validation(ValidationError::MissingPoint)) => {
                MISSING_POINT_MESSAGE.to_string()
            }
            AppError::Infrastructure(InfrastructureError::Network(NetworkError::RequestFailed {
                message,
                ..
            })) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Application(e) => write!(f, "Application Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(e) => write!(f, "Validation: {}", e),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::MissingPoint => write!(f, "{}", MISSING_POINT_MESSAGE),
            ValidationError::EmptySeries => write!(f, "Forecast contains no samples"),
            ValidationError::MisalignedSeries { field, expected, actual } => {
                write!(f, "Field '{}' has {} values, expected {}", field, actual, expected)
            }
            ValidationError::UnsortedSeries { index } => {
                write!(f, "Sample {} is earlier than its predecessor", index)
            }
            ValidationError::InvalidTimestamp(raw) => write!(f, "Invalid timestamp: {}", raw),
        }
    }
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApplicationError::Configuration(e) => write!(f, "Configuration: {}", e),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ConfigurationError::DeserializationFailed(msg) => write!(f, "Cannot read configuration: {}", msg),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "Network: {}", e),
            InfrastructureError::External(e) => write!(f, "External: {}", e),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::RequestFailed { status, message } => write!(f, "{} (status {})", message, status),
            NetworkError::TransportFailed(msg) => write!(f, "Request could not be sent: {}", msg),
            NetworkError::ResponseDecodeFailed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl Display for ExternalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ExternalServiceError::MapWidget(msg) => write!(f, "Map widget: {}", msg),
            ExternalServiceError::ChartEngine(msg) => write!(f, "Chart engine: {}", msg),
            ExternalServiceError::BrowserApi(msg) => write!(f, "Browser API: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Error conversion utilities
impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        AppError::Application(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Application(ApplicationError::Configuration(error))
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Infrastructure(InfrastructureError::Network(error))
    }
}

impl From<ExternalServiceError> for AppError {
    fn from(error: ExternalServiceError) -> Self {
        AppError::Infrastructure(InfrastructureError::External(error))
    }
}

// Browser calls reject with arbitrary JS values
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
