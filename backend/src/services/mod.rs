//! Business logic services
//!
//! Services wrap the shared engine with validation policy and logging.

pub mod body_composition;

pub use body_composition::BodyCompositionService;
