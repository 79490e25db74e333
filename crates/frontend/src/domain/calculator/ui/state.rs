//! Calculator screen state and its reducer
//!
//! Every change goes through [`ViewState::reduce`]: one action in, one new
//! state out. Network completions are actions too, so whichever completion
//! is reduced last decides what the screen shows.

use contracts::domain::calculator::{CalculationRequest, Operator};
use contracts::domain::string_concepts::ConceptsResponse;

use super::error::{ApiError, ValidationError, CONCEPTS_ERROR_MESSAGE};

/// Placeholder text the concepts section never renders
pub const LOADING_TEXT: &str = "Loading...";

/// Value shown in the "String Concepts" section
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConceptsValue {
    #[default]
    Empty,
    Loading,
    Value(f64),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Num1,
    Num2,
    Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Screen mounted; concepts fetch about to start
    Initialize,
    Edit(Field, String),
    ConceptsLoaded(ConceptsResponse),
    ConceptsFailed,
    CalculationRejected(ValidationError),
    CalculationSucceeded(f64),
    CalculationFailed(ApiError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub num1_text: String,
    pub num2_text: String,
    pub operator_text: String,
    pub result: Option<f64>,
    pub error: String,
    pub concepts: ConceptsValue,
    pub name: String,
}

/// What the calculation output area shows
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationDisplay {
    Nothing,
    Error(String),
    Result(f64),
}

/// What the concepts section shows; `None` means "render nothing"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptsDisplay {
    pub value: Option<String>,
    pub name: Option<String>,
}

impl ViewState {
    pub fn reduce(self, action: Action) -> ViewState {
        match action {
            Action::Initialize => ViewState {
                concepts: ConceptsValue::Loading,
                ..self
            },
            Action::Edit(Field::Num1, text) => ViewState {
                num1_text: text,
                ..self
            },
            Action::Edit(Field::Num2, text) => ViewState {
                num2_text: text,
                ..self
            },
            Action::Edit(Field::Operator, text) => ViewState {
                operator_text: text,
                ..self
            },
            Action::ConceptsLoaded(response) => ViewState {
                concepts: ConceptsValue::Value(response.implicit_result),
                name: response.name,
                ..self
            },
            // name keeps whatever it had
            Action::ConceptsFailed => ViewState {
                concepts: ConceptsValue::Failed(CONCEPTS_ERROR_MESSAGE.to_string()),
                ..self
            },
            // A stale result stays; the error masks it on screen.
            Action::CalculationRejected(e) => ViewState {
                error: e.to_string(),
                ..self
            },
            Action::CalculationSucceeded(value) => ViewState {
                result: Some(value),
                error: String::new(),
                ..self
            },
            Action::CalculationFailed(e) => ViewState {
                result: None,
                error: e.user_message(),
                ..self
            },
        }
    }

    /// Check the three inputs and build the request to send
    ///
    /// Checks run in order and stop at the first failure.
    pub fn validate(&self) -> Result<CalculationRequest, ValidationError> {
        if self.num1_text.is_empty() || self.num2_text.is_empty() || self.operator_text.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let operator: Operator = self
            .operator_text
            .parse()
            .map_err(|_| ValidationError::InvalidOperator)?;

        Ok(CalculationRequest::new(
            parse_operand(&self.num1_text),
            parse_operand(&self.num2_text),
            operator,
        ))
    }

    pub fn calculation_display(&self) -> CalculationDisplay {
        if !self.error.is_empty() {
            CalculationDisplay::Error(self.error.clone())
        } else if let Some(value) = self.result {
            CalculationDisplay::Result(value)
        } else {
            CalculationDisplay::Nothing
        }
    }

    pub fn concepts_display(&self) -> ConceptsDisplay {
        let value = match &self.concepts {
            ConceptsValue::Empty | ConceptsValue::Loading => None,
            ConceptsValue::Value(v) => Some(format_number(*v)),
            ConceptsValue::Failed(message) => Some(message.clone()),
        };
        let name = if self.name.is_empty() || self.name == LOADING_TEXT {
            None
        } else {
            Some(self.name.clone())
        };
        ConceptsDisplay { value, name }
    }
}

/// Locale-free decimal parse; anything unparsable becomes NaN
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Plain `Display` for f64: `7` rather than `7.0`, and non-finite values
/// come out as `NaN` / `inf`
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
