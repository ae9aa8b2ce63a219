//! Clipboard access for copying the generated question.

use std::sync::Arc;

use arboard::Clipboard;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to copy text: {0}")]
pub struct ClipboardError(String);

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Destination for copied text.
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Handler for the system clipboard.
///
/// On X11 and Wayland the copied text is only served while this handle is
/// alive, so it is kept for the life of the process.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

type Opener = dyn Fn() -> Result<Box<dyn ClipboardSink>, ClipboardError> + Send + Sync;

/// One clipboard handle shared by every copy, opened on first use.
#[derive(Clone)]
pub struct SharedClipboard {
    open: Arc<Opener>,
    sink: Arc<Mutex<Option<Box<dyn ClipboardSink>>>>,
}

impl SharedClipboard {
    /// The system clipboard.
    pub fn system() -> Self {
        Self::with_opener(open_system)
    }

    pub fn with_opener<F>(open: F) -> Self
    where
        F: Fn() -> Result<Box<dyn ClipboardSink>, ClipboardError> + Send + Sync + 'static,
    {
        Self {
            open: Arc::new(open),
            sink: Arc::new(Mutex::new(None)),
        }
    }

    /// Write text through the shared handle. A failed open is retried on the
    /// next copy.
    ///
    /// Blocking: callers run it off the UI thread.
    pub fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self.sink.lock();
        let sink = match guard.take() {
            Some(sink) => sink,
            None => (self.open)()?,
        };
        guard.insert(sink).set_text(text)
    }
}

fn open_system() -> Result<Box<dyn ClipboardSink>, ClipboardError> {
    Ok(Box::new(ClipboardHandler::new()?))
}
