//! Sales / dynamic price prediction against the remote model service.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{HttpTransport, PredictionClient, RawResponse, SuccessEffect};
pub use error::PredictError;
pub use request::PredictRequest;
pub use response::{interpret_predict_response, PredictionResult};
