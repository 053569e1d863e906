use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    /// Kept as the provider's JSON number so responses go out unchanged.
    pub calories: Number,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub duration: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecipeResult {
    pub recipes: Vec<Recipe>,
}

/// Output schema handed to the model, in Gemini's `responseSchema` dialect.
pub fn recipe_result_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "ingredients": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "quantity": { "type": "STRING" },
                                    "calories": { "type": "NUMBER" }
                                },
                                "required": ["name", "quantity", "calories"]
                            }
                        },
                        "steps": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "duration": { "type": "STRING" }
                    },
                    "required": ["title", "ingredients", "steps", "duration"]
                }
            }
        },
        "required": ["recipes"]
    })
}
