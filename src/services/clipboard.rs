//! Clipboard service
//!
//! Writes plain text to the system clipboard by piping it to an external
//! command (pbcopy, wl-copy, xclip, ...). Writes run on the blocking pool and
//! report back to the UI loop as `ServiceEvent::CopyFinished`.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc::UnboundedSender;

use crate::logic::errors;
use crate::logic::platform;
use crate::messages::ServiceEvent;

/// Destination for copied text
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by a command that reads the text from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command_line: &str) -> Result<Self> {
        let Some((program, args)) = platform::split_command(command_line) else {
            bail!("clipboard_command is empty");
        };
        Ok(Self { program, args })
    }

    /// Use the configured command, or the platform default
    pub fn from_config(configured: Option<&str>) -> Result<Self> {
        Self::new(configured.unwrap_or(platform::default_clipboard_command()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run clipboard command '{}'", self.program))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(e).with_context(|| format!("Failed to write to '{}'", self.program));
            }
            // stdin is dropped here, closing the pipe so the command sees EOF
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for '{}'", self.program))?;
        if !status.success() {
            bail!("clipboard command '{}' exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Write `text` in the background; the outcome is sent on `tx`.
///
/// The text is passed through untouched.
pub fn spawn_copy(
    clipboard: Arc<dyn Clipboard>,
    control: &'static str,
    request_id: u64,
    text: String,
    tx: UnboundedSender<ServiceEvent>,
) {
    tokio::task::spawn_blocking(move || {
        let result = clipboard.write_text(&text).map_err(|e| {
            tracing::error!(control, error = %errors::format_error_chain(&e), "failed to copy text");
            errors::format_error_message(&e)
        });
        if result.is_ok() {
            tracing::debug!(control, bytes = text.len(), "copied to clipboard");
        }
        let _ = tx.send(ServiceEvent::CopyFinished {
            control,
            request_id,
            result,
        });
    });
}
