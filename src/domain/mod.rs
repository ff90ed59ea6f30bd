pub mod chart;
pub mod errors;
pub mod forecast;
pub mod location;
pub mod logging;
