//! Prediction form UI Module
//!
//! - view_model.rs: state and commands
//! - view.rs: page component
//! - inputs.rs / result_card.rs: building blocks

mod inputs;
mod result_card;
mod view;
mod view_model;

pub use view::PredictPage;
pub use view_model::{BackendStatus, PredictViewModel};
