use serde_json::{Value, json};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

/// Every failure reaches the caller as a 500 with a single `error` message.
pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    let message = match err {
        AppError::MalformedResult => err.to_string(),
        AppError::RequestParse(_)
        | AppError::Config(_)
        | AppError::Generation(_)
        | AppError::Other(_) => format!("Failed to generate recipes: {err}"),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}
