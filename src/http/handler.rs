use serde_json::json;
use vercel_runtime::{Body, Request, Response, StatusCode};

use crate::{
    clients::gemini::StructuredGenerator,
    error::Result,
    http::{
        cors::add_cors,
        response::{error_response, json_response},
    },
    services::recipe_generation::generate_recipes,
};

/// Routes one invocation of the generate endpoint.
///
/// `connect` builds the generator and is only called for `POST`, so preflight
/// and rejected methods never need provider configuration.
pub async fn handle<G, F>(req: Request, connect: F) -> anyhow::Result<Response<Body>>
where
    G: StructuredGenerator,
    F: FnOnce() -> Result<G>,
{
    let resp = match req.method().as_str() {
        "OPTIONS" => Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::from(String::new()))?,
        "POST" => {
            let outcome = match connect() {
                Ok(generator) => generate_recipes(&generator, req.body()).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(recipes) => json_response(StatusCode::OK, &recipes)?,
                Err(err) => {
                    tracing::error!(error = %err, "recipe generation failed");
                    let (status, body) = error_response(&err);
                    json_response(status, &body)?
                }
            }
        }
        other => {
            tracing::warn!(method = other, "rejected method");
            let mut resp = json_response(
                StatusCode::METHOD_NOT_ALLOWED,
                &json!({ "error": "Use POST with a JSON body" }),
            )?;
            resp.headers_mut().insert("Allow", "POST".parse()?);
            resp
        }
    };
    add_cors(resp)
}
