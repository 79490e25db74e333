use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Простой middleware для логирования запросов
///
/// Тело ответа читается целиком, чтобы узнать реальный размер; ответы
/// сервисов калькулятора маленькие.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} | failed to read response body: {}",
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    if parts.status.is_success() {
        tracing::info!(status, elapsed_ms, bytes = bytes.len(), "{} | {} {}", timestamp, method, path);
    } else {
        tracing::warn!(status, elapsed_ms, bytes = bytes.len(), "{} | {} {}", timestamp, method, path);
    }

    Response::from_parts(parts, Body::from(bytes))
}
