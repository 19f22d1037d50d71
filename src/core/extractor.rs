use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        // The body limit surfaces as a buffering failure carrying 413
        if rejection.0.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge("Request body is too large".to_string());
        }

        let message = match rejection.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::Validation(message)
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Path extractor whose rejections use the error envelope.
///
/// A path segment that cannot be decoded (e.g. invalid UTF-8 after
/// percent-decoding) names no resource, so it is reported as not found.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppPathRejection(rejection)),
        }
    }
}

pub struct AppPathRejection(PathRejection);

impl From<AppPathRejection> for AppError {
    fn from(rejection: AppPathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.0.body_text());
        AppError::NotFound("Resource not found".to_string())
    }
}

impl IntoResponse for AppPathRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use serde_json::Value;

    async fn echo_id(AppPath(id): AppPath<String>) -> String {
        id
    }

    async fn echo_json(AppJson(body): AppJson<Value>) -> String {
        body.to_string()
    }

    fn server() -> TestServer {
        let router = Router::new()
            .route("/items/{id}", get(echo_id))
            .route("/echo", axum::routing::post(echo_json));
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_path_decodes_percent_encoding() {
        let response = server().get("/items/SD%20001").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "SD 001");
    }

    #[tokio::test]
    async fn test_undecodable_path_is_not_found_envelope() {
        let response = server().get("/items/%FF").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_json_syntax_error_is_validation_envelope() {
        let response = server()
            .post("/echo")
            .bytes("{".into())
            .content_type("application/json")
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON syntax"));
    }
}
