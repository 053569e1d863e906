use serde_json::Value;

use crate::{
    clients::gemini::{GenerationRequest, StructuredGenerator},
    error::{AppError, Result},
    models::{
        recipe::{recipe_result_schema, Recipe, RecipeResult},
        request::RequestPayload,
    },
    prompt::build_prompt,
};

/// Sampling temperature for every generation call. Not client-controlled.
pub const TEMPERATURE: f32 = 0.75;

pub async fn generate_recipes(
    generator: &dyn StructuredGenerator,
    body: &[u8],
) -> Result<Vec<Recipe>> {
    let profile = RequestPayload::from_slice(body)?.normalize();
    tracing::info!(
        body = ?profile.body,
        objective = ?profile.objective,
        diet = ?profile.diet,
        allergies = ?profile.allergies,
        intolerance = ?profile.intolerance,
        conditions = ?profile.conditions,
        budget = ?profile.budget,
        kca = profile.kca_value(),
        "request received"
    );

    let prompt = build_prompt(&profile);
    tracing::debug!(%prompt, "prompt generated");

    let request = GenerationRequest {
        prompt,
        schema: recipe_result_schema(),
        temperature: TEMPERATURE,
    };
    let object = generator.generate_object(&request).await?;
    let result = validate(object)?;
    tracing::info!(recipes = result.recipes.len(), "recipes generated");
    Ok(result.recipes)
}

/// The object and its `recipes` field must both be present and non-null.
fn validate(object: Option<Value>) -> Result<RecipeResult> {
    let object = object.ok_or(AppError::MalformedResult)?;
    match object.get("recipes") {
        None | Some(Value::Null) => return Err(AppError::MalformedResult),
        Some(_) => {}
    }
    serde_json::from_value(object)
        .map_err(|e| AppError::Generation(format!("response does not match schema: {e}")))
}
