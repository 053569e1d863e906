use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};

/// A field clients send either as a plain string or as a list of strings.
/// Any other JSON shape is kept as `Other` and resolves to nothing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TextField {
    Scalar(String),
    List(Vec<String>),
    Other(Value),
}

impl TextField {
    /// Lists only ever contribute their first element.
    pub fn into_first(self) -> Option<String> {
        match self {
            TextField::Scalar(s) => Some(s),
            TextField::List(items) => items.into_iter().next(),
            TextField::Other(_) => None,
        }
    }
}

/// Caloric baseline as sent by the client.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Kca {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Kca {
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Kca::Number(n) => *n,
            Kca::Text(s) => leading_number(s)?,
            Kca::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Reads the decimal number at the start of `s`, ignoring whatever follows,
/// so `"1800 kcal"` yields 1800.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

#[derive(Deserialize, Debug, Default)]
pub struct RequestPayload {
    #[serde(default)]
    pub body: Option<TextField>,
    #[serde(default)]
    pub objective: Option<TextField>,
    #[serde(default)]
    pub diet: Option<TextField>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub intolerance: Option<Vec<String>>,
    #[serde(default)]
    pub conditions: Option<Vec<String>>,
    // Accepted but not used when building the prompt.
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default)]
    pub kca: Option<Kca>,
}

impl RequestPayload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| AppError::RequestParse(e.to_string()))
    }

    pub fn normalize(self) -> DietaryProfile {
        DietaryProfile {
            body: self.body.and_then(TextField::into_first),
            objective: self.objective.and_then(TextField::into_first),
            diet: self.diet.and_then(TextField::into_first),
            allergies: self.allergies.unwrap_or_default(),
            intolerance: self.intolerance.unwrap_or_default(),
            conditions: self.conditions.unwrap_or_default(),
            budget: self.budget,
            kca: self.kca.as_ref().and_then(Kca::parse),
        }
    }
}

/// Canonical form of a request: every loosely-typed field resolved once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietaryProfile {
    pub body: Option<String>,
    pub objective: Option<String>,
    pub diet: Option<String>,
    pub allergies: Vec<String>,
    pub intolerance: Vec<String>,
    pub conditions: Vec<String>,
    pub budget: Option<Value>,
    /// `None` when the baseline was absent or not a number.
    pub kca: Option<f64>,
}

impl DietaryProfile {
    pub fn kca_value(&self) -> f64 {
        self.kca.unwrap_or(0.0)
    }
}
