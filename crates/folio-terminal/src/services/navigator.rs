//! Opening links outside the terminal.
//!
//! The interpreter never launches anything itself. It hands URLs to a
//! [`Navigator`], which the front-end picks based on configuration.

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

/// Where a link should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A new browser tab or window
    NewContext,
    /// The current context; used for `mailto:` links, which hand off to the mail client
    SameContext,
}

impl LinkTarget {
    pub fn for_url(url: &str) -> Self {
        if url.starts_with("mailto:") {
            LinkTarget::SameContext
        } else {
            LinkTarget::NewContext
        }
    }
}

pub trait Navigator: Send + Sync + fmt::Debug {
    fn open(&self, url: &str, target: LinkTarget) -> io::Result<()>;
}

pub type SharedNavigator = Arc<dyn Navigator>;

/// Hands URLs to the desktop's default handler.
#[cfg(feature = "runtime")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

#[cfg(feature = "runtime")]
impl Navigator for SystemNavigator {
    fn open(&self, url: &str, target: LinkTarget) -> io::Result<()> {
        tracing::info!(url, ?target, "opening link");
        open::that_detached(url)
    }
}

/// Logs requested URLs without opening anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn open(&self, url: &str, target: LinkTarget) -> io::Result<()> {
        tracing::info!(url, ?target, "link opening disabled, not launching");
        Ok(())
    }
}

/// Remembers every request instead of opening anything.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<(String, LinkTarget)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Every `(url, target)` pair requested so far, oldest first.
    pub fn opened(&self) -> Vec<(String, LinkTarget)> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str, target: LinkTarget) -> io::Result<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push((url.to_string(), target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_opens_in_same_context() {
        assert_eq!(
            LinkTarget::for_url("mailto:someone@example.com"),
            LinkTarget::SameContext
        );
        assert_eq!(
            LinkTarget::for_url("https://github.com/someone"),
            LinkTarget::NewContext
        );
    }

    #[test]
    fn test_recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.open("https://a.example", LinkTarget::NewContext).unwrap();
        nav.open("mailto:b@example.com", LinkTarget::SameContext)
            .unwrap();
        assert_eq!(
            nav.opened(),
            vec![
                ("https://a.example".to_string(), LinkTarget::NewContext),
                ("mailto:b@example.com".to_string(), LinkTarget::SameContext),
            ]
        );
    }

    #[test]
    fn test_logging_navigator_never_fails() {
        assert!(LoggingNavigator.open("https://a.example", LinkTarget::NewContext).is_ok());
    }
}
