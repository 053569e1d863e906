use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recipe_gen_api::{
    clients::gemini::{GenerationRequest, StructuredGenerator},
    http::handler::handle,
    services::recipe_generation::{generate_recipes, TEMPERATURE},
    AppError, Result,
};
use serde_json::{json, Value};
use vercel_runtime::{Body, Request, StatusCode};

/// Replays a fixed outcome and records the request it was given.
struct FakeGenerator {
    outcome: std::result::Result<Option<Value>, String>,
    seen: Arc<Mutex<Option<GenerationRequest>>>,
}

impl FakeGenerator {
    fn returning(object: Option<Value>) -> Self {
        Self { outcome: Ok(object), seen: Arc::default() }
    }

    fn failing(message: &str) -> Self {
        Self { outcome: Err(message.to_string()), seen: Arc::default() }
    }

    fn last_prompt(&self) -> String {
        self.seen.lock().unwrap().as_ref().unwrap().prompt.clone()
    }
}

#[async_trait]
impl StructuredGenerator for FakeGenerator {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Option<Value>> {
        *self.seen.lock().unwrap() = Some(request.clone());
        self.outcome.clone().map_err(AppError::Generation)
    }
}

fn recipe(title: &str) -> Value {
    json!({
        "title": title,
        "ingredients": [
            { "name": "garbanzos", "quantity": "200 g", "calories": 328 },
            { "name": "espinaca", "quantity": "100 g", "calories": 23.4 }
        ],
        "steps": ["Saltear la espinaca.", "Agregar los garbanzos."],
        "duration": "20 minutos"
    })
}

fn request(method: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method.parse().unwrap();
    req
}

fn post(body: &str) -> Request {
    request("POST", body)
}

fn json_body(resp: &vercel_runtime::Response<Body>) -> Value {
    serde_json::from_slice(resp.body()).unwrap()
}

#[tokio::test]
async fn prompt_reflects_lose_weight_request() {
    let generator = FakeGenerator::returning(Some(json!({ "recipes": [] })));
    let body = br#"{"diet":"vegana","objective":"bajar","kca":2000,"allergies":["nueces"]}"#;
    generate_recipes(&generator, body).await.unwrap();

    let seen = generator.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.temperature, TEMPERATURE);
    assert_eq!(seen.schema["required"], json!(["recipes"]));
    assert!(seen.prompt.contains("sin productos animales ni derivados."));
    assert!(seen.prompt.contains("1500 kcal"));
    assert!(seen.prompt.contains("Alergias: nueces"));
    assert!(!seen.prompt.contains("Intolerancias"));
    assert!(!seen.prompt.contains("Condiciones médicas"));
}

#[tokio::test]
async fn string_baseline_gains_surplus() {
    let generator = FakeGenerator::returning(Some(json!({ "recipes": [] })));
    generate_recipes(&generator, br#"{"diet":"Omnivora","objective":"subir","kca":"1800"}"#)
        .await
        .unwrap();
    assert!(generator.last_prompt().contains("2300 kcal"));
}

#[tokio::test]
async fn unknown_diet_still_calls_model() {
    let generator = FakeGenerator::returning(Some(json!({ "recipes": [] })));
    generate_recipes(&generator, br#"{"diet":"Keto"}"#).await.unwrap();
    let prompt = generator.last_prompt();
    assert!(prompt.contains("- Dieta: \n"));
    assert!(!prompt.contains("kcal"));
}

#[tokio::test]
async fn generator_failure_is_500_with_detail() {
    let resp = handle(post(r#"{"diet":"vegana"}"#), || {
        Ok(FakeGenerator::failing("API key not valid"))
    })
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = json_body(&resp)["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Failed to generate recipes:"));
    assert!(message.contains("API key not valid"));
}

#[tokio::test]
async fn missing_recipes_field_is_invalid_structure() {
    let resp = handle(post(r#"{"diet":"vegana"}"#), || {
        Ok(FakeGenerator::returning(Some(json!({ "meals": [] }))))
    })
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(&resp), json!({ "error": "Invalid API response structure" }));
}

#[tokio::test]
async fn absent_object_is_invalid_structure() {
    let resp = handle(post("{}"), || Ok(FakeGenerator::returning(None)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(&resp)["error"], "Invalid API response structure");
}

#[tokio::test]
async fn recipes_are_returned_unmodified() {
    let recipes: Vec<Value> = (1..=6).map(|i| recipe(&format!("Receta {i}"))).collect();
    let resp = handle(post(r#"{"diet":"Pescetariana","kca":2200}"#), || {
        Ok(FakeGenerator::returning(Some(json!({ "recipes": recipes.clone() }))))
    })
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["Content-Type"], "application/json");
    assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    assert_eq!(json_body(&resp), Value::Array(recipes));
}

#[tokio::test]
async fn malformed_json_body_is_500() {
    let resp = handle(post("{diet: vegana"), || Ok(FakeGenerator::returning(None)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = json_body(&resp)["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Failed to generate recipes:"));
}

#[tokio::test]
async fn missing_configuration_is_500() {
    let resp = handle(post("{}"), || -> Result<FakeGenerator> {
        Err(AppError::Config("Missing GOOGLE_GENERATIVE_AI_API_KEY".into()))
    })
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(&resp)["error"]
        .as_str()
        .unwrap()
        .contains("GOOGLE_GENERATIVE_AI_API_KEY"));
}

#[tokio::test]
async fn preflight_skips_the_generator() {
    let req = request("OPTIONS", "");
    let resp = handle(req, || -> Result<FakeGenerator> {
        panic!("generator must not be built for preflight")
    })
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers()["Access-Control-Allow-Methods"], "POST,OPTIONS");
}

#[tokio::test]
async fn other_methods_are_rejected() {
    let req = request("GET", "");
    let resp = handle(req, || -> Result<FakeGenerator> {
        panic!("generator must not be built for GET")
    })
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers()["Allow"], "POST");
}

#[tokio::test]
async fn non_numeric_kca_shapes_still_generate() {
    let generator = FakeGenerator::returning(Some(json!({ "recipes": [] })));
    generate_recipes(&generator, br#"{"diet":"vegana","kca":true,"body":{"h":170}}"#)
        .await
        .unwrap();
    let prompt = generator.last_prompt();
    assert!(!prompt.contains("gasto calórico"));
    assert!(prompt.contains("sin productos animales ni derivados."));
}

#[tokio::test]
async fn baseline_with_unit_suffix_is_read() {
    let generator = FakeGenerator::returning(Some(json!({ "recipes": [] })));
    generate_recipes(&generator, br#"{"objective":"bajar","kca":"1800 kcal"}"#)
        .await
        .unwrap();
    assert!(generator.last_prompt().contains("es de 1300 kcal."));
}
