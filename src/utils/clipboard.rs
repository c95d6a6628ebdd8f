// src/utils/clipboard.rs
use clipboard::{ClipboardContext, ClipboardProvider};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Nothing to copy: no password has been generated")]
    Empty,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Anything that can receive the current password.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Block for `duration` so the copied text stays available. Used before
    /// a one-shot process exits.
    fn hold(&mut self, _duration: Duration) {}
}

/// The desktop clipboard.
///
/// On X11 the selection is served by the process that set it, so the last
/// context is kept here and `hold` must run before a short-lived process
/// exits.
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
    copied: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard { ctx: None, copied: None }
    }

    pub fn has_copied(&self) -> bool {
        self.copied.is_some()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        log::debug!("Copied {} characters to the clipboard", text.chars().count());
        self.ctx = Some(ctx);
        self.copied = Some(text.to_string());
        Ok(())
    }

    fn hold(&mut self, duration: Duration) {
        let (Some(ctx), Some(copied)) = (self.ctx.as_mut(), self.copied.as_deref()) else {
            return;
        };

        log::debug!("Holding clipboard for {}s", duration.as_secs());
        std::thread::sleep(duration);

        // Clear only if nobody has copied something else meanwhile
        if ctx.get_contents().ok().as_deref() == Some(copied) {
            let _ = ctx.set_contents(String::new());
        }
        self.ctx = None;
        self.copied = None;
    }
}
