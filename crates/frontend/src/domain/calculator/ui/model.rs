use async_trait::async_trait;
use contracts::domain::calculator::{CalculationRequest, CalculationResponse};
use contracts::domain::string_concepts::ConceptsResponse;
use gloo_net::http::Request;

use super::error::ApiError;
use super::state::{Action, ViewState};
use crate::shared::api_utils::Endpoints;

/// The two services the calculator screen talks to
#[async_trait(?Send)]
pub trait CalculatorApi {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, ApiError>;

    async fn fetch_concepts(&self) -> Result<ConceptsResponse, ApiError>;
}

/// [`CalculatorApi`] over HTTP with `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl CalculatorApi for HttpApi {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, ApiError> {
        let response = Request::post(&self.endpoints.calculate)
            .json(request)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let body = response
            .json::<CalculationResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));

        interpret_calculation(response.ok(), response.status(), body)
    }

    async fn fetch_concepts(&self) -> Result<ConceptsResponse, ApiError> {
        let response = Request::get(&self.endpoints.string_concepts)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(ApiError::Transport(format!(
                "String concepts request failed: {}",
                response.status()
            )));
        }

        response
            .json::<ConceptsResponse>()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
    }
}

/// Turn a `/calculate` reply into a value or an error
///
/// Any non-2xx status is a transport failure whatever the body says. Only a
/// 2xx body with a non-empty `error` is a remote error; a 2xx body with
/// neither field is a transport failure too.
pub fn interpret_calculation(
    ok: bool,
    status: u16,
    body: Result<CalculationResponse, String>,
) -> Result<f64, ApiError> {
    if !ok {
        return Err(ApiError::Transport(format!("Calculation failed: {}", status)));
    }

    let resp = body.map_err(ApiError::Transport)?;
    if let Some(message) = resp.error_message() {
        return Err(ApiError::Remote(message.to_string()));
    }
    resp.result.ok_or_else(|| {
        ApiError::Transport("Response carries neither result nor error".to_string())
    })
}

/// Validate the inputs and, if they pass, make exactly one call
pub async fn calculate<A: CalculatorApi + ?Sized>(api: &A, state: &ViewState) -> Action {
    let request = match state.validate() {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Calculation rejected locally: {}", e);
            return Action::CalculationRejected(e);
        }
    };

    match api.calculate(&request).await {
        Ok(value) => Action::CalculationSucceeded(value),
        Err(e) => {
            if let ApiError::Transport(cause) = &e {
                log::error!("Calculation request failed: {}", cause);
            }
            Action::CalculationFailed(e)
        }
    }
}

/// One attempt to load the string concepts, no retry
pub async fn load_concepts<A: CalculatorApi + ?Sized>(api: &A) -> Action {
    match api.fetch_concepts().await {
        Ok(response) => Action::ConceptsLoaded(response),
        Err(e) => {
            log::error!("Error: Failed to fetch string results. {}", e);
            Action::ConceptsFailed
        }
    }
}
