//! Pre-flight check run before any prediction request.

use super::aggregate::FeatureSet;

pub const IDENTIFIER_REQUIRED: &str = "Item Identifier is required.";
pub const MRP_NOT_A_NUMBER: &str = "Item MRP must be a number.";

/// Returns the first failing rule's message, or `None` when the set can be sent.
pub fn validate(features: &FeatureSet) -> Option<&'static str> {
    if features.item_identifier.trim().is_empty() {
        return Some(IDENTIFIER_REQUIRED);
    }
    match features.item_mrp {
        // non-finite values would be serialized as null
        Some(mrp) if mrp.is_finite() => None,
        _ => Some(MRP_NOT_A_NUMBER),
    }
}
