pub mod config;
pub mod form_state;
