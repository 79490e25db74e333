use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Operator
// ============================================================================

/// Арифметическая операция калькулятора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Only the exact symbol is accepted: no trimming, no aliases.
impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("Unknown operator: {:?}", s))
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// Тело запроса `POST /calculate`
///
/// `operator` остаётся строкой: сервер сам решает, что делать с неизвестным
/// символом. Нечисловые операнды (NaN, бесконечность) serde_json пишет как
/// `null`, поэтому при чтении `null` превращается обратно в NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(deserialize_with = "number_or_nan")]
    pub num1: f64,
    #[serde(deserialize_with = "number_or_nan")]
    pub num2: f64,
    pub operator: String,
}

impl CalculationRequest {
    pub fn new(num1: f64, num2: f64, operator: Operator) -> Self {
        Self {
            num1,
            num2,
            operator: operator.symbol().to_string(),
        }
    }
}

fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Ответ `POST /calculate`: либо `{result}`, либо `{error}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculationResponse {
    pub fn success(result: f64) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(error.into()),
        }
    }

    /// Ошибка сервиса, если она есть и не пустая
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parses_exact_symbols_only() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert!(" +".parse::<Operator>().is_err());
        assert!("x".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_request_wire_format() {
        let req = CalculationRequest::new(3.0, 4.5, Operator::Multiply);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"num1": 3.0, "num2": 4.5, "operator": "*"})
        );
    }

    #[test]
    fn test_nan_operand_goes_out_as_null_and_comes_back_as_nan() {
        let req = CalculationRequest::new(f64::NAN, 1.0, Operator::Add);
        let text = serde_json::to_string(&req).unwrap();
        assert!(text.contains("\"num1\":null"));

        let back: CalculationRequest = serde_json::from_str(&text).unwrap();
        assert!(back.num1.is_nan());
        assert_eq!(back.num2, 1.0);
    }

    #[test]
    fn test_response_skips_absent_fields() {
        let ok = serde_json::to_string(&CalculationResponse::success(7.0)).unwrap();
        assert_eq!(ok, r#"{"result":7.0}"#);

        let err = serde_json::to_string(&CalculationResponse::failure("Cannot divide by zero"))
            .unwrap();
        assert_eq!(err, r#"{"error":"Cannot divide by zero"}"#);
    }

    #[test]
    fn test_empty_error_is_not_an_error() {
        let resp: CalculationResponse =
            serde_json::from_str(r#"{"result": 2, "error": ""}"#).unwrap();
        assert_eq!(resp.error_message(), None);
        assert_eq!(resp.result, Some(2.0));
    }
}
