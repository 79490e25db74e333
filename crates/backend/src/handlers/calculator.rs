use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::calculator::{CalculationRequest, CalculationResponse};

use crate::domain::calculator::service::{self, CalculationError};

/// Ошибка вычисления является ответом сервиса, а не сбоем транспорта:
/// клиент показывает `{error}` только из ответа 200.
impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(CalculationResponse::failure(self.to_string())),
        )
            .into_response()
    }
}

/// POST /calculate
pub async fn calculate(
    Json(request): Json<CalculationRequest>,
) -> Result<Json<CalculationResponse>, CalculationError> {
    match service::calculate(&request) {
        Ok(result) => Ok(Json(CalculationResponse::success(result))),
        Err(e) => {
            tracing::info!(
                operator = %request.operator,
                "calculation rejected: {}",
                e
            );
            Err(e)
        }
    }
}
