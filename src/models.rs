// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 100;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Clamp a requested length into the supported range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            include_numbers,
            include_symbols,
        }
    }

    pub fn with_length(self, length: usize) -> Self {
        Self {
            length: clamp_length(length),
            ..self
        }
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Too Weak")]
    TooWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::TooWeak => write!(f, "Too Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Which character classes a password contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrengthCriteria {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl StrengthCriteria {
    pub fn met(&self) -> usize {
        [self.has_uppercase, self.has_lowercase, self.has_digit, self.has_special]
            .iter()
            .filter(|c| **c)
            .count()
    }
}

/// Everything the front-end renders for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub options: PasswordGenerationOptions,
    pub password: String,
    pub strength: Option<StrengthLabel>,
    pub history: Vec<String>,
    pub has_history: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    pub password: Option<String>,
    pub strength: Option<StrengthLabel>,
    pub history: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordAnalysisResponse {
    pub success: bool,
    pub strength: Option<StrengthLabel>,
    pub criteria: Option<StrengthCriteria>,
    pub length: usize,
    pub error: Option<String>,
}
