//! Shared contracts for the dynamic pricing client.
//!
//! Everything in this crate is platform-neutral: the browser front end plugs
//! its own HTTP transport into [`usecases::u501_predict::PredictionClient`].

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
