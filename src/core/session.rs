// src/core/session.rs
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::generators::PasswordGenerator;
use crate::models::{clamp_length, PasswordGenerationOptions, SessionSnapshot, StrengthLabel};
use crate::utils::{ClipboardError, ClipboardSink};

/// In-memory state of one generator session.
///
/// Every configuration change regenerates the password, reclassifies it and
/// appends it to the history before returning.
pub struct Session<R: Rng = ThreadRng> {
    generator: PasswordGenerator<R>,
    options: PasswordGenerationOptions,
    password: String,
    strength: Option<StrengthLabel>,
    history: Vec<String>,
}

impl Session<ThreadRng> {
    pub fn with_options(options: PasswordGenerationOptions) -> Self {
        Self::with_generator(PasswordGenerator::new(), options)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_generator(generator: PasswordGenerator<R>, options: PasswordGenerationOptions) -> Self {
        Self {
            generator,
            options: options.with_length(options.length),
            password: String::new(),
            strength: None,
            history: Vec::new(),
        }
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn current_password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> Option<StrengthLabel> {
        self.strength
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Set the length, clamped to 6..=100. Regenerates if it changed.
    pub fn set_length(&mut self, length: usize) -> bool {
        let length = clamp_length(length);
        self.apply(PasswordGenerationOptions { length, ..self.options })
    }

    pub fn set_include_numbers(&mut self, include: bool) -> bool {
        self.apply(PasswordGenerationOptions { include_numbers: include, ..self.options })
    }

    pub fn set_include_symbols(&mut self, include: bool) -> bool {
        self.apply(PasswordGenerationOptions { include_symbols: include, ..self.options })
    }

    pub fn toggle_numbers(&mut self) -> bool {
        self.set_include_numbers(!self.options.include_numbers)
    }

    pub fn toggle_symbols(&mut self) -> bool {
        self.set_include_symbols(!self.options.include_symbols)
    }

    /// Replace the whole configuration at once; at most one regeneration.
    pub fn set_options(&mut self, options: PasswordGenerationOptions) -> bool {
        self.apply(options.with_length(options.length))
    }

    fn apply(&mut self, options: PasswordGenerationOptions) -> bool {
        if options == self.options {
            return false;
        }
        self.options = options;
        self.regenerate();
        true
    }

    /// Generate, classify and record a new password with the current options.
    pub fn regenerate(&mut self) -> &str {
        let password = self.generator.generate_password(&self.options);
        let strength = self.generator.analyze_password_strength(&password);

        log::debug!(
            "Generated password: length={} numbers={} symbols={} strength={}",
            self.options.length,
            self.options.include_numbers,
            self.options.include_symbols,
            strength
        );

        self.history.push(password.clone());
        self.password = password;
        self.strength = Some(strength);
        &self.password
    }

    /// Back to defaults with no password and empty history. Does not generate.
    pub fn reset(&mut self) {
        log::debug!("Clearing session ({} passwords in history)", self.history.len());
        self.password.clear();
        self.options = PasswordGenerationOptions::default();
        self.history.clear();
        self.strength = None;
    }

    /// Hand the current password to `sink`. The session is never modified.
    pub fn copy_to<S: ClipboardSink + ?Sized>(&self, sink: &mut S) -> Result<(), ClipboardError> {
        if self.password.is_empty() {
            return Err(ClipboardError::Empty);
        }
        sink.write_text(&self.password)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            options: self.options,
            password: self.password.clone(),
            strength: self.strength,
            history: self.history.clone(),
            has_history: self.has_history(),
        }
    }
}
