use crate::generators::password::SYMBOLS;
use crate::models::{StrengthCriteria, StrengthLabel};

/// Passwords shorter than this are always `TooWeak`.
pub const MIN_STRONG_LENGTH: usize = 8;

pub fn criteria(password: &str) -> StrengthCriteria {
    StrengthCriteria {
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special: password.bytes().any(|c| SYMBOLS.contains(&c)),
    }
}

/// Classify a password. The length rule wins over the criteria count.
pub fn analyze_password_strength(password: &str) -> StrengthLabel {
    if password.chars().count() < MIN_STRONG_LENGTH {
        return StrengthLabel::TooWeak;
    }

    match criteria(password).met() {
        4 => StrengthLabel::VeryStrong,
        3 => StrengthLabel::Strong,
        _ => StrengthLabel::Weak,
    }
}
