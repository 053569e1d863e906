//! Builds the natural-language instruction sent to the model.

use crate::models::diet::diet_clause;
use crate::models::request::DietaryProfile;

/// Objective value that asks for a caloric deficit.
pub const LOSE_WEIGHT: &str = "bajar";

/// Offset applied to the baseline in either direction.
pub const CALORIC_ADJUSTMENT: f64 = 500.0;

pub fn caloric_target(kca: f64, objective: Option<&str>) -> f64 {
    if objective == Some(LOSE_WEIGHT) {
        kca - CALORIC_ADJUSTMENT
    } else {
        kca + CALORIC_ADJUSTMENT
    }
}

pub fn caloric_expenditure_line(profile: &DietaryProfile) -> Option<String> {
    let kca = profile.kca?;
    let target = caloric_target(kca, profile.objective.as_deref());
    Some(format!(
        "1. El gasto calórico de esta persona es de {target} kcal."
    ))
}

fn labeled_line(index: u8, label: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!(
        "{index}. IMPORTANTE tener en cuenta {label}: {}",
        items.join(", ")
    ))
}

pub fn allergies_line(profile: &DietaryProfile) -> Option<String> {
    labeled_line(5, "Alergias", &profile.allergies)
}

pub fn intolerance_line(profile: &DietaryProfile) -> Option<String> {
    labeled_line(6, "Intolerancias", &profile.intolerance)
}

pub fn conditions_line(profile: &DietaryProfile) -> Option<String> {
    labeled_line(7, "Condiciones médicas", &profile.conditions)
}

pub fn build_prompt(profile: &DietaryProfile) -> String {
    let mut lines = vec![
        "Genera un mínimo de 5 y un máximo de 7 recetas de comida. Ten en cuenta los siguientes parámetros para estas recetas:".to_string(),
        format!("- Dieta: {}", diet_clause(profile.diet.as_deref())),
    ];
    lines.extend(
        [
            caloric_expenditure_line(profile),
            allergies_line(profile),
            intolerance_line(profile),
            conditions_line(profile),
        ]
        .into_iter()
        .flatten(),
    );
    lines.extend(
        [
            "Lo más importante es que las recetas se basen en la dieta, alergias e intolerancias proporcionadas.",
            "Instrucciones adicionales:",
            "- Los pasos a seguir para cocinar deben ser lo más concisos posible.",
            "- No incluyas ingredientes comunes de cocina como sal y aceite en la lista de ingredientes.",
            "- Proporciona las cantidades necesarias en gramos o unidades dependiendo del ingrediente para cocinar dos porciones de cada receta.",
        ]
        .map(String::from),
    );
    lines.join("\n")
}
