use crate::error::{Result, StapleError};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::debug;

/// Clipboard writers to try, in order, for the current platform.
#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[];

/// Copies text to the system clipboard using the first available helper
/// (pbcopy, wl-copy/xclip/xsel, or clip.exe).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for (program, args) in CANDIDATES {
        match pipe_to(program, args, text) {
            Err(StapleError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(program, "clipboard helper not installed");
                continue;
            }
            other => return other,
        }
    }
    Err(StapleError::Api(
        "No clipboard helper found (install wl-copy, xclip or xsel)".to_string(),
    ))
}

/// Runs `program` and writes `text` to its stdin.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(StapleError::Io)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| StapleError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| StapleError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(StapleError::Api(format!("{} exited with {}", program, status)))
    }
}
