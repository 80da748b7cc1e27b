use crate::error::{Result, SolpushError};
use crate::exec::EchoTarget;
use crate::ports::{Notifier, Opener};

/// Opens URLs in the default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl Opener for BrowserOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| SolpushError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Prints the URL instead of launching a browser.
#[derive(Debug, Clone, Copy)]
pub struct EchoOpener {
    target: EchoTarget,
}

impl EchoOpener {
    pub fn new(target: EchoTarget) -> Self {
        Self { target }
    }
}

impl Opener for EchoOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.target.line(&format!("open {url}"));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
