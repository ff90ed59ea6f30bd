//! Chart aggregate: viewport session, axis ticks and the engine-facing figure.

pub mod entities;
pub mod figure;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
