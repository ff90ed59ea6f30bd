pub mod forecast_page;
pub mod wasm_api;

pub use forecast_page::{ForecastPage, load_config, report};
