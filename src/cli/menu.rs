// src/cli/menu.rs
use inquire::{Confirm, InquireError, Select, Text};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::Session;
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{format_history, styled_strength, ClipboardSink, SystemClipboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SetLength,
    ToggleNumbers(bool),
    ToggleSymbols(bool),
    Regenerate,
    Copy,
    ShowHistory,
    Clear,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |on: bool| if on { "on" } else { "off" };
        match self {
            MenuAction::SetLength => write!(f, "📏  Set length"),
            MenuAction::ToggleNumbers(on) => write!(f, "🔢  Include numbers [{}]", on_off(*on)),
            MenuAction::ToggleSymbols(on) => write!(f, "✳️  Include special characters [{}]", on_off(*on)),
            MenuAction::Regenerate => write!(f, "🔁  Regenerate"),
            MenuAction::Copy => write!(f, "📋  Copy to clipboard"),
            MenuAction::ShowHistory => write!(f, "📜  Show password history"),
            MenuAction::Clear => write!(f, "🧹  Clear"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

fn print_state(session: &Session) {
    let options = session.options();
    println!();
    println!("🔑 Password: {}", session.current_password());
    println!("💪 Strength: {}", styled_strength(session.strength()));
    println!(
        "⚙️  Length: {} | Numbers: {} | Special: {}",
        options.length,
        if options.include_numbers { "yes" } else { "no" },
        if options.include_symbols { "yes" } else { "no" },
    );
    if session.has_history() {
        println!("📜 {} password(s) in history", session.history().len());
    }
    println!();
}

fn prompt_length(current: usize) -> Result<Option<usize>, InquireError> {
    let input = Text::new("Password length:")
        .with_default(&current.to_string())
        .with_help_message(&format!("{}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
        .prompt()?;

    match input.trim().parse::<usize>() {
        Ok(length) => Ok(Some(length)),
        Err(_) => {
            println!("❌ '{}' is not a number", input.trim());
            Ok(None)
        }
    }
}

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 RUST PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::with_options(config.default_options());
    session.regenerate();
    let mut clipboard = SystemClipboard::new();

    while !should_exit.load(Ordering::SeqCst) {
        print_state(&session);

        let options = session.options();
        let actions = vec![
            MenuAction::SetLength,
            MenuAction::ToggleNumbers(options.include_numbers),
            MenuAction::ToggleSymbols(options.include_symbols),
            MenuAction::Regenerate,
            MenuAction::Copy,
            MenuAction::ShowHistory,
            MenuAction::Clear,
            MenuAction::Exit,
        ];

        let selection = match Select::new("Choose an option:", actions)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .with_page_size(10)
            .prompt_skippable()
        {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection {
            MenuAction::SetLength => {
                match prompt_length(session.options().length) {
                    Ok(Some(length)) => {
                        if length != session.options().length
                            && !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
                        {
                            println!(
                                "⚠️ Length must be between {} and {}, clamping",
                                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                            );
                        }
                        session.set_length(length);
                    }
                    Ok(None) => {}
                    Err(InquireError::OperationCanceled) => {}
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(Box::new(e)),
                }
            }
            MenuAction::ToggleNumbers(_) => {
                session.toggle_numbers();
            }
            MenuAction::ToggleSymbols(_) => {
                session.toggle_symbols();
            }
            MenuAction::Regenerate => {
                session.regenerate();
            }
            MenuAction::Copy => match session.copy_to(&mut clipboard) {
                Ok(()) => println!("✅ Password copied to clipboard!"),
                Err(e) => {
                    log::warn!("Clipboard copy failed: {}", e);
                    println!("❌ Failed to copy: {}", e);
                }
            },
            MenuAction::ShowHistory => {
                if session.has_history() {
                    println!("\nPassword History");
                    println!("{}", format_history(session.history()));
                } else {
                    println!("No passwords generated yet.");
                }
            }
            MenuAction::Clear => {
                match Confirm::new("Clear the password and history?")
                    .with_default(false)
                    .prompt_skippable()
                {
                    Ok(Some(true)) => {
                        session.reset();
                        println!("🧹 Cleared.");
                    }
                    Ok(_) => {}
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(Box::new(e)),
                }
            }
            MenuAction::Exit => break,
        }
    }

    if clipboard.has_copied() {
        println!(
            "📋 Keeping the copied password for {}s, then clearing.",
            config.clipboard_hold.as_secs()
        );
        clipboard.hold(config.clipboard_hold);
    }

    log::info!("Leaving interactive menu after {} generations", session.history().len());
    Ok(())
}
