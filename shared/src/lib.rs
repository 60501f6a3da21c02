//! Gym Metrics Shared Library
//!
//! Body composition engine and the types shared by the backend and the
//! WASM bindings.

pub mod body_composition;
pub mod errors;
pub mod measurement_form;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use body_composition::*;
pub use errors::*;
pub use measurement_form::MeasurementForm;
pub use types::*;
pub use units::*;
