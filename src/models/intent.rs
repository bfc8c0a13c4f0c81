//! Structured shopping intent.

use serde::{Deserialize, Serialize};

/// What the shopper is looking for, derived from free-form input.
///
/// Token lists never contain case-insensitive duplicates; the push methods
/// enforce this so extraction strategies can append blindly. Insertion order
/// is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    /// Canonical furniture-type tokens.
    pub furniture_types: Vec<String>,
    /// Canonical color tokens.
    pub colors: Vec<String>,
    /// Canonical style tokens.
    pub styles: Vec<String>,
    /// Price ceiling; the maximum of all numeric quantities in the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Exact category, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the shopper needs space-efficient furniture.
    pub space_efficient: bool,
}

impl SearchIntent {
    /// Creates an empty intent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a furniture-type token unless already present.
    pub fn push_furniture_type(&mut self, token: impl Into<String>) {
        push_unique(&mut self.furniture_types, token.into());
    }

    /// Appends a color token unless already present.
    pub fn push_color(&mut self, token: impl Into<String>) {
        push_unique(&mut self.colors, token.into());
    }

    /// Appends a style token unless already present.
    pub fn push_style(&mut self, token: impl Into<String>) {
        push_unique(&mut self.styles, token.into());
    }

    /// Records a detected price, keeping the maximum seen so far.
    pub fn record_price(&mut self, price: f64) {
        self.max_price = Some(self.max_price.map_or(price, |current| current.max(price)));
    }

    /// Whether no signal of any kind was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.furniture_types.is_empty()
            && self.colors.is_empty()
            && self.styles.is_empty()
            && self.max_price.is_none()
            && self.category.is_none()
            && !self.space_efficient
    }
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    let lower = token.to_lowercase();
    if !tokens.iter().any(|t| t.to_lowercase() == lower) {
        tokens.push(token);
    }
}

/// Which extraction strategy produced the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Entity analysis by the cloud NLP service.
    CloudNlp,
    /// Label and color detection by the cloud vision service.
    CloudVision,
    /// Deterministic pattern matching.
    #[default]
    PatternMatch,
}

impl Provenance {
    /// Returns the string representation used in serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CloudNlp => "cloud-nlp",
            Self::CloudVision => "cloud-vision",
            Self::PatternMatch => "pattern-match",
        }
    }

    /// Whether an external AI service produced the intent.
    #[must_use]
    pub const fn is_ai(&self) -> bool {
        matches!(self, Self::CloudNlp | Self::CloudVision)
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
