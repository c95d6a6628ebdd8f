// src/cli/handlers.rs
use std::error::Error;
use std::time::Duration;
use rand::Rng;

use crate::core::config::Config;
use crate::core::Session;
use crate::generators::strength;
use crate::models::{
    clamp_length, PasswordAnalysisResponse, PasswordGenerationOptions, PasswordGenerationResponse,
};
use crate::utils::{format_criteria, format_history, styled_strength, ClipboardSink, SystemClipboard};

/// `--flag` / `--no-flag` pair to an override; `None` keeps the configured default.
pub fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Resolve command-line options on top of the configured defaults.
pub fn resolve_options(
    config: &Config,
    length: Option<usize>,
    numbers: Option<bool>,
    symbols: Option<bool>,
) -> PasswordGenerationOptions {
    let mut options = config.default_options();

    if let Some(requested) = length {
        let clamped = clamp_length(requested);
        if clamped != requested {
            eprintln!("⚠️ Length {} is out of range, using {}", requested, clamped);
            log::warn!("Requested length {} clamped to {}", requested, clamped);
        }
        options.length = clamped;
    }
    if let Some(include) = numbers {
        options.include_numbers = include;
    }
    if let Some(include) = symbols {
        options.include_symbols = include;
    }

    options
}

/// Run `count` generations in `session` and describe the outcome.
pub fn generate_response<R: Rng>(session: &mut Session<R>, count: u32) -> PasswordGenerationResponse {
    for _ in 0..count {
        session.regenerate();
    }

    let snapshot = session.snapshot();
    PasswordGenerationResponse {
        success: true,
        password: Some(snapshot.password),
        strength: snapshot.strength,
        history: snapshot.history,
        error: None,
    }
}

/// Print `response`, copying the current password first when `clipboard` is given.
///
/// On a successful copy the clipboard is held for `hold` after printing. A
/// failed copy marks the response unsuccessful and leaves the session alone.
pub fn deliver<R, S, F>(
    session: &Session<R>,
    clipboard: Option<&mut S>,
    hold: Duration,
    mut response: PasswordGenerationResponse,
    json: bool,
    print: F,
) -> Result<(), Box<dyn Error>>
where
    R: Rng,
    S: ClipboardSink + ?Sized,
    F: FnOnce(&PasswordGenerationResponse) -> Result<(), Box<dyn Error>>,
{
    let Some(sink) = clipboard else {
        return print(&response);
    };

    match session.copy_to(&mut *sink) {
        Ok(()) => {
            print(&response)?;
            if !json {
                eprintln!(
                    "📋 Password copied to clipboard! Keeping it for {}s, then clearing.",
                    hold.as_secs()
                );
            }
            sink.hold(hold);
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            response.success = false;
            response.error = Some(format!("Failed to copy to clipboard: {}", e));
            print(&response)?;
        }
    }

    Ok(())
}

pub fn analyze_response(password: &str) -> PasswordAnalysisResponse {
    PasswordAnalysisResponse {
        success: true,
        strength: Some(strength::analyze_password_strength(password)),
        criteria: Some(strength::criteria(password)),
        length: password.chars().count(),
        error: None,
    }
}

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    numbers: Option<bool>,
    symbols: Option<bool>,
    count: u32,
    copy: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let options = resolve_options(config, length, numbers, symbols);
    let mut session = Session::with_options(options);
    let response = generate_response(&mut session, count);

    let print = |response: &PasswordGenerationResponse| -> Result<(), Box<dyn Error>> {
        if json {
            println!("{}", serde_json::to_string_pretty(response)?);
            return Ok(());
        }
        if count > 1 {
            println!("{}", format_history(&response.history));
        } else if let Some(password) = &response.password {
            println!("{}", password);
        }
        println!("Strength: {}", styled_strength(response.strength));
        if let Some(err) = &response.error {
            eprintln!("❌ {}", err);
        }
        Ok(())
    };

    let mut clipboard = SystemClipboard::new();
    let sink = if copy { Some(&mut clipboard) } else { None };
    deliver(&session, sink, config.clipboard_hold, response, json, print)
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let response = analyze_response(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Strength: {}", styled_strength(response.strength));
    if let Some(criteria) = &response.criteria {
        println!("{}", format_criteria(criteria));
    }
    if response.length < strength::MIN_STRONG_LENGTH {
        println!("Passwords shorter than {} characters are always too weak.", strength::MIN_STRONG_LENGTH);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PasswordGenerator;
    use crate::models::StrengthLabel;
    use crate::utils::ClipboardError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> Config {
        Config::from_lookup(|_| None).0
    }

    fn session() -> Session<ChaCha8Rng> {
        let mut session = Session::with_generator(
            PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(8)),
            PasswordGenerationOptions::new(16, true, true),
        );
        session.regenerate();
        session
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        copied: Vec<String>,
        held: Vec<Duration>,
    }

    impl ClipboardSink for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }

        fn hold(&mut self, duration: Duration) {
            self.held.push(duration);
        }
    }

    #[test]
    fn flag_pairs_map_to_overrides() {
        assert_eq!(flag_override(false, false), None);
        assert_eq!(flag_override(true, false), Some(true));
        assert_eq!(flag_override(false, true), Some(false));
    }

    #[test]
    fn flags_override_configured_defaults() {
        let options = resolve_options(&config(), None, Some(true), None);
        assert_eq!(options, PasswordGenerationOptions::new(12, true, false));

        let options = resolve_options(&config(), Some(1000), None, Some(true));
        assert_eq!(options, PasswordGenerationOptions::new(100, false, true));
    }

    #[test]
    fn letters_only_despite_env_defaults() {
        let (config, _) = Config::from_lookup(|key| match key {
            "DEFAULT_INCLUDE_NUMBERS" | "DEFAULT_INCLUDE_SYMBOLS" => Some("true".to_string()),
            _ => None,
        });
        assert_eq!(resolve_options(&config, None, None, None), PasswordGenerationOptions::new(12, true, true));
        assert_eq!(
            resolve_options(&config, None, Some(false), Some(false)),
            PasswordGenerationOptions::new(12, false, false)
        );
    }

    #[test]
    fn generate_response_lists_every_password() {
        let mut session = Session::with_generator(
            PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(8)),
            PasswordGenerationOptions::new(16, true, true),
        );
        let response = generate_response(&mut session, 4);

        assert!(response.success);
        assert_eq!(response.history.len(), 4);
        assert_eq!(response.password.as_deref(), response.history.last().map(String::as_str));
        assert_eq!(response.password.unwrap().len(), 16);
    }

    #[test]
    fn successful_copy_prints_then_holds() {
        let mut session = session();
        let response = generate_response(&mut session, 1);
        let mut clipboard = FakeClipboard::default();
        let mut printed = None;

        deliver(&session, Some(&mut clipboard), Duration::from_secs(7), response, true, |r| {
            printed = Some((r.success, r.error.clone()));
            Ok(())
        })
        .unwrap();

        assert_eq!(printed, Some((true, None)));
        assert_eq!(clipboard.copied, vec![session.current_password().to_string()]);
        assert_eq!(clipboard.held, vec![Duration::from_secs(7)]);
    }

    #[test]
    fn failed_copy_is_not_reported_as_success() {
        let mut session = session();
        let response = generate_response(&mut session, 1);
        let history_before = session.history().to_vec();
        let mut clipboard = FakeClipboard { fail: true, ..Default::default() };
        let mut printed = None;

        deliver(&session, Some(&mut clipboard), Duration::from_secs(7), response, true, |r| {
            printed = Some((r.success, r.error.clone()));
            Ok(())
        })
        .unwrap();

        let (success, error) = printed.unwrap();
        assert!(!success);
        assert!(error.unwrap().contains("no display"));
        assert!(clipboard.held.is_empty());
        assert_eq!(session.history(), history_before.as_slice());
    }

    #[test]
    fn no_clipboard_just_prints() {
        let mut session = session();
        let response = generate_response(&mut session, 2);
        let mut printed = 0;

        deliver::<_, FakeClipboard, _>(&session, None, Duration::from_secs(7), response, true, |r| {
            assert!(r.success);
            printed += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(printed, 1);
    }

    #[test]
    fn analyze_reports_label_and_criteria() {
        let response = analyze_response("Abcdefg1");
        assert_eq!(response.strength, Some(StrengthLabel::Strong));
        assert_eq!(response.criteria.map(|c| c.met()), Some(3));
        assert_eq!(response.length, 8);
    }
}
