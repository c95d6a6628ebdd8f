// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::{StrengthCriteria, StrengthLabel};

// Green for Very Strong, yellow for Strong, red for everything else
pub fn styled_strength(label: Option<StrengthLabel>) -> StyledObject<String> {
    let text = label.map(|l| l.to_string()).unwrap_or_default();
    match label {
        Some(StrengthLabel::VeryStrong) => style(text).green(),
        Some(StrengthLabel::Strong) => style(text).yellow(),
        _ => style(text).red(),
    }
}

// Numbered history, oldest first
pub fn format_history(history: &[String]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, pw)| format!("{:>3}. {}", i + 1, pw))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_criteria(criteria: &StrengthCriteria) -> String {
    let mark = |met: bool| if met { "✅" } else { "❌" };
    format!(
        "{} uppercase  {} lowercase  {} digit  {} special ({}/4)",
        mark(criteria.has_uppercase),
        mark(criteria.has_lowercase),
        mark(criteria.has_digit),
        mark(criteria.has_special),
        criteria.met()
    )
}
