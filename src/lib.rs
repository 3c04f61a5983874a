pub mod config;
pub mod error;
pub mod measure;
pub mod pose;

pub use error::{MeasurementError, Result};
