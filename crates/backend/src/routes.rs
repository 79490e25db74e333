use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::config::StringConceptsConfig;
use crate::shared::request_logger::request_logger;

/// Роуты сервиса калькулятора (порт 5000)
pub fn calculator_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/calculate", post(handlers::calculator::calculate))
        .layer(middleware::from_fn(request_logger))
        .layer(cors())
}

/// Роуты сервиса string concepts (порт 5001)
pub fn string_concepts_routes(settings: StringConceptsConfig) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/stringconcepts",
            get(handlers::string_concepts::get_concepts),
        )
        .with_state(settings)
        .layer(middleware::from_fn(request_logger))
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::calculator::{CalculationRequest, CalculationResponse, Operator};
    use contracts::domain::string_concepts::ConceptsResponse;
    use tokio::net::TcpListener;

    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_calculate_roundtrip() {
        let base = spawn(calculator_routes()).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/calculate", base))
            .json(&CalculationRequest::new(3.0, 4.0, Operator::Add))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: CalculationResponse = resp.json().await.unwrap();
        assert_eq!(body, CalculationResponse::success(7.0));
    }

    #[tokio::test]
    async fn test_divide_by_zero_is_200_with_error_body() {
        let base = spawn(calculator_routes()).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/calculate", base))
            .json(&CalculationRequest::new(1.0, 0.0, Operator::Divide))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: CalculationResponse = resp.json().await.unwrap();
        assert_eq!(body.error_message(), Some("Cannot divide by zero"));
        assert_eq!(body.result, None);
    }

    #[tokio::test]
    async fn test_nan_operand_is_rejected() {
        let base = spawn(calculator_routes()).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/calculate", base))
            .header("content-type", "application/json")
            .body(r#"{"num1": null, "num2": 2, "operator": "+"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: CalculationResponse = resp.json().await.unwrap();
        assert_eq!(body.error_message(), Some("Invalid operand"));
    }

    #[tokio::test]
    async fn test_overflow_answers_error_not_null_result() {
        let base = spawn(calculator_routes()).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/calculate", base))
            .header("content-type", "application/json")
            .body(r#"{"num1": 1e308, "num2": 10, "operator": "*"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let text = resp.text().await.unwrap();
        assert_eq!(text, r#"{"error":"Result is out of range"}"#);
    }

    #[tokio::test]
    async fn test_string_concepts() {
        let settings = StringConceptsConfig {
            port: 0,
            sample_name: "Sadaf".to_string(),
        };
        let base = spawn(string_concepts_routes(settings)).await;
        let body: ConceptsResponse = reqwest::get(format!("{}/stringconcepts", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            body,
            ConceptsResponse {
                implicit_result: 14.5,
                name: "ad".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_post() {
        let base = spawn(calculator_routes()).await;
        let resp = reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, format!("{}/calculate", base))
            .header("origin", "http://127.0.0.1:8080")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
