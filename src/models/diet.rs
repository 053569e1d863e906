/// Dietary patterns recognized when building the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    Omnivora,
    Lactoveg,
    Ovoveg,
    Lactoovoveg,
    Pescetariana,
    Vegana,
}

impl Diet {
    /// Matches the exact label clients send. Case-sensitive.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Omnivora" => Some(Diet::Omnivora),
            "Lactoveg" => Some(Diet::Lactoveg),
            "Ovoveg" => Some(Diet::Ovoveg),
            "Lactoovoveg" => Some(Diet::Lactoovoveg),
            "Pescetariana" => Some(Diet::Pescetariana),
            "vegana" => Some(Diet::Vegana),
            _ => None,
        }
    }

    pub fn clause(self) -> &'static str {
        match self {
            Diet::Omnivora => "tanto alimentos de origen animal como vegetal.",
            Diet::Lactoveg => "con vegetales y productos lácteos, pero no huevos ni carne.",
            Diet::Ovoveg => "con vegetales y huevos, pero no lácteos ni carne.",
            Diet::Lactoovoveg => "con vegetales, lácteos y huevos, pero no carne.",
            Diet::Pescetariana => "con vegetales y pescado, pero no otras carnes.",
            Diet::Vegana => {
                "con solo alimentos de origen vegetal, sin productos animales ni derivados."
            }
        }
    }
}

/// Clause for a raw diet label; empty for unknown or missing labels.
pub fn diet_clause(label: Option<&str>) -> &'static str {
    label.and_then(Diet::parse).map(Diet::clause).unwrap_or("")
}
