//! Link launcher
//!
//! Opens a URL with an external command. The command is spawned detached with
//! all standard streams closed and is never waited on.

use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::logic::platform;

pub fn open_link(command_line: Option<&str>, url: &str) -> Result<()> {
    let command_line = command_line.unwrap_or(platform::default_open_command());
    let Some((program, args)) = platform::split_command(command_line) else {
        bail!("open_command is empty");
    };

    Command::new(&program)
        .args(&args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open with '{}'", program))?;

    tracing::debug!(program = %program, url, "spawned open command");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(open_link(Some(""), "https://example.com").is_err());
    }

    #[test]
    fn test_borrowed_command_line_is_accepted() {
        let configured = String::from("   ");
        let err = open_link(Some(configured.as_str()), "https://example.com").unwrap_err();
        assert_eq!(err.to_string(), "open_command is empty");
    }

    #[test]
    fn test_missing_program_is_error() {
        let err = open_link(Some("leadview-no-such-opener"), "https://example.com").unwrap_err();
        assert!(err.to_string().contains("Failed to open with"));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_configured_command() {
        assert!(open_link(Some("true"), "https://example.com").is_ok());
    }
}
