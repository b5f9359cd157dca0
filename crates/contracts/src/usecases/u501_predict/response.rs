use super::error::PredictError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque model output.
///
/// Usually an object with `predicted_sales` and `dynamic_price`, but any
/// extra keys (or a different shape entirely) are kept and rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResult(Value);

impl PredictionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn predicted_sales(&self) -> Option<f64> {
        self.get("predicted_sales").and_then(Value::as_f64)
    }

    pub fn dynamic_price(&self) -> Option<f64> {
        self.get("dynamic_price").and_then(Value::as_f64)
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Turn a raw `/predict` response into a result or a user-facing error.
///
/// The body is parsed before the status is looked at so the server's own
/// `error` message can be surfaced on failures.
pub fn interpret_predict_response(status: u16, body: &str) -> Result<PredictionResult, PredictError> {
    let json: Value = serde_json::from_str(body).map_err(|_| PredictError::Protocol {
        body: body.to_string(),
    })?;

    if !(200..300).contains(&status) {
        return Err(PredictError::Application {
            status,
            message: server_error_message(&json),
        });
    }

    let first = match json {
        Value::Array(items) => items.into_iter().next(),
        other => Some(other),
    };
    match first {
        None | Some(Value::Null) => Err(PredictError::EmptyResult),
        Some(value) => Ok(PredictionResult::new(value)),
    }
}

fn server_error_message(json: &Value) -> Option<String> {
    match json.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_object() {
        let result =
            interpret_predict_response(200, r#"{"predicted_sales":12.3,"dynamic_price":150.0}"#)
                .unwrap();
        assert_eq!(result.predicted_sales(), Some(12.3));
        assert_eq!(result.dynamic_price(), Some(150.0));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let result = interpret_predict_response(
            201,
            r#"{"predicted_sales":1,"dynamic_price":2,"model":"v1"}"#,
        )
        .unwrap();
        assert_eq!(result.get("model"), Some(&json!("v1")));
    }

    #[test]
    fn test_array_takes_first_element() {
        let result = interpret_predict_response(
            200,
            r#"[{"predicted_sales":1,"dynamic_price":2},{"predicted_sales":9}]"#,
        )
        .unwrap();
        assert_eq!(result.value(), &json!({"predicted_sales": 1, "dynamic_price": 2}));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(
            interpret_predict_response(200, "[]"),
            Err(PredictError::EmptyResult)
        );
    }

    #[test]
    fn test_null_result_is_empty() {
        assert_eq!(
            interpret_predict_response(200, "null"),
            Err(PredictError::EmptyResult)
        );
        assert_eq!(
            interpret_predict_response(200, "[null]"),
            Err(PredictError::EmptyResult)
        );
    }

    #[test]
    fn test_non_json_body() {
        let err = interpret_predict_response(200, "not json").unwrap_err();
        assert!(err
            .to_string()
            .contains("Server returned non-JSON response: not json"));

        // non-JSON wins over the status code
        let err = interpret_predict_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PredictError::Protocol { .. }));
    }

    #[test]
    fn test_error_status_with_message() {
        let err = interpret_predict_response(500, r#"{"error":"model unavailable"}"#).unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn test_error_status_without_message() {
        let err = interpret_predict_response(404, r#"{"detail":"nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error 404");

        let err = interpret_predict_response(500, r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error 500");

        let err = interpret_predict_response(500, r#"{"error":0}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error 500");

        let err = interpret_predict_response(500, r#"{"error":false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error 500");

        let err = interpret_predict_response(500, r#"{"error":7}"#).unwrap_err();
        assert_eq!(err.to_string(), "7");

        // even a result-shaped body is a failure on a bad status
        let err = interpret_predict_response(500, r#"[{"predicted_sales":1}]"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error 500");
    }

    #[test]
    fn test_missing_metrics_are_none() {
        let result = interpret_predict_response(200, r#"{"predicted_sales":"n/a"}"#).unwrap();
        assert_eq!(result.predicted_sales(), None);
        assert_eq!(result.dynamic_price(), None);
    }
}
