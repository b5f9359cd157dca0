pub mod aggregate;
pub mod presets;
pub mod validation;

pub use aggregate::{parse_numeric, FeatureField, FeatureSet};
pub use presets::{default_preset, find_preset, presets, Preset};
pub use validation::validate;
