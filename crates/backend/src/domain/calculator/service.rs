use contracts::domain::calculator::{CalculationRequest, Operator};
use thiserror::Error;

/// Ошибки вычисления, которые сервис отдаёт клиенту как `{error}`
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid operator")]
    InvalidOperator,

    #[error("Invalid operand")]
    InvalidOperand,

    #[error("Result is out of range")]
    Overflow,
}

/// Выполнить арифметическую операцию из запроса
pub fn calculate(request: &CalculationRequest) -> Result<f64, CalculationError> {
    let operator: Operator = request
        .operator
        .parse()
        .map_err(|_| CalculationError::InvalidOperator)?;

    // NaN приходит как `null` (см. CalculationRequest)
    if !request.num1.is_finite() || !request.num2.is_finite() {
        return Err(CalculationError::InvalidOperand);
    }

    let result = apply(operator, request.num1, request.num2)?;
    // JSON has no infinity: it would go out as `null`
    if !result.is_finite() {
        return Err(CalculationError::Overflow);
    }
    Ok(result)
}

pub fn apply(operator: Operator, num1: f64, num2: f64) -> Result<f64, CalculationError> {
    match operator {
        Operator::Add => Ok(num1 + num2),
        Operator::Subtract => Ok(num1 - num2),
        Operator::Multiply => Ok(num1 * num2),
        Operator::Divide if num2 == 0.0 => Err(CalculationError::DivisionByZero),
        Operator::Divide => Ok(num1 / num2),
    }
}
