//! Platform defaults for external commands

/// Clipboard command used when none is configured
pub fn default_clipboard_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "pbcopy"
    } else if cfg!(target_os = "windows") {
        "clip"
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        "wl-copy"
    } else {
        "xclip -selection clipboard"
    }
}

/// Command used to open links when none is configured
pub fn default_open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Split a configured command line into program and arguments.
///
/// Arguments are whitespace-separated; quoting is not supported.
///
/// # Examples
/// ```
/// use leadview::logic::platform::split_command;
///
/// assert_eq!(
///     split_command("xclip -selection clipboard"),
///     Some(("xclip".to_string(), vec!["-selection".to_string(), "clipboard".to_string()]))
/// );
/// assert_eq!(split_command("   "), None);
/// ```
pub fn split_command(command_line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command_line.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}
