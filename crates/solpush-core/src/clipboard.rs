//! System clipboard access through platform copy utilities.
//!
//! No clipboard library is linked; the text is piped to the first copy tool
//! found on `PATH`.
//!
//! # Tool priority
//! 1. pbcopy   — macOS
//! 2. wl-copy  — Wayland sessions
//! 3. xclip    — X11
//! 4. xsel     — X11 fallback
//! 5. clip.exe / clip — Windows and WSL

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Result, SolpushError};
use crate::exec::EchoTarget;
use crate::ports::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
    ClipExe,
    Clip,
}

impl ClipboardTool {
    pub const ALL: [ClipboardTool; 6] = [
        ClipboardTool::Pbcopy,
        ClipboardTool::WlCopy,
        ClipboardTool::Xclip,
        ClipboardTool::Xsel,
        ClipboardTool::ClipExe,
        ClipboardTool::Clip,
    ];

    pub fn binary(&self) -> &'static str {
        match self {
            ClipboardTool::Pbcopy => "pbcopy",
            ClipboardTool::WlCopy => "wl-copy",
            ClipboardTool::Xclip => "xclip",
            ClipboardTool::Xsel => "xsel",
            ClipboardTool::ClipExe => "clip.exe",
            ClipboardTool::Clip => "clip",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            ClipboardTool::Xclip => &["-selection", "clipboard"],
            ClipboardTool::Xsel => &["--clipboard", "--input"],
            _ => &[],
        }
    }
}

/// Detect the first available copy tool.
/// Returns None if none is installed.
pub fn detect_clipboard() -> Option<ClipboardTool> {
    ClipboardTool::ALL
        .into_iter()
        .find(|tool| which::which(tool.binary()).is_ok())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let tool = detect_clipboard().ok_or_else(|| {
            SolpushError::Clipboard("no copy tool found (pbcopy, wl-copy, xclip, xsel, clip)".into())
        })?;
        copy_with(tool, text)
    }
}

fn copy_with(tool: ClipboardTool, text: &str) -> Result<()> {
    let mut child = Command::new(tool.binary())
        .args(tool.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| SolpushError::Clipboard(format!("{}: {e}", tool.binary())))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SolpushError::Clipboard(format!("failed to write stdin: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| SolpushError::Clipboard(format!("{}: {e}", tool.binary())))?;
    if !status.success() {
        return Err(SolpushError::Clipboard(format!(
            "{} exited with {status}",
            tool.binary()
        )));
    }
    tracing::debug!("copied {} bytes with {}", text.len(), tool.binary());
    Ok(())
}

/// Writes the text to the terminal instead of the clipboard.
#[derive(Debug, Clone, Copy)]
pub struct EchoClipboard {
    target: EchoTarget,
}

impl EchoClipboard {
    pub fn new(target: EchoTarget) -> Self {
        Self { target }
    }
}

impl Clipboard for EchoClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        self.target.line(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_clipboard_does_not_panic() {
        // Result depends on the host
        let _ = detect_clipboard();
    }

    #[test]
    fn binaries_are_stable() {
        let names: Vec<_> = ClipboardTool::ALL.iter().map(|t| t.binary()).collect();
        assert_eq!(
            names,
            vec!["pbcopy", "wl-copy", "xclip", "xsel", "clip.exe", "clip"]
        );
    }

    #[test]
    fn x11_tools_target_clipboard_selection() {
        assert_eq!(ClipboardTool::Xclip.args(), &["-selection", "clipboard"]);
        assert_eq!(ClipboardTool::Xsel.args(), &["--clipboard", "--input"]);
        assert!(ClipboardTool::Pbcopy.args().is_empty());
    }

    #[test]
    fn echo_clipboard_succeeds() {
        assert!(EchoClipboard::new(EchoTarget::Stderr).copy("text").is_ok());
    }
}
