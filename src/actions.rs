//! Copy, download, and raw-view actions over the untouched payload.
//!
//! All three are pass-throughs: no transformation of the text, ever. The
//! clipboard write is modeled as a request/response `Result`; the UI reacts
//! to the returned value (a transient label state), there is no retry or
//! queuing; a second copy click simply re-issues the operation.

use std::path::{Path, PathBuf};

use crate::types::Payload;

/// Errors from the action layer. Never fatal to the rest of the view.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// No clipboard is available on this system.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
    /// The clipboard write itself failed.
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
    /// Writing the download file failed.
    #[error("download failed: {0}")]
    Download(#[from] std::io::Error),
}

/// Transient label state for a copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    /// The button label to show for this state.
    pub fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Error",
        }
    }
}

/// Handle to the system clipboard.
///
/// Initialization failure is tolerated (headless systems); every copy then
/// reports `ClipboardUnavailable` instead of panicking.
pub struct ClipboardHandle {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardHandle {
    pub fn new() -> Self {
        let inner = arboard::Clipboard::new().ok();
        if inner.is_none() {
            log::warn!("Failed to initialize clipboard support");
        }
        Self { inner }
    }

    /// Write text to the clipboard, byte-faithfully.
    pub fn copy(&mut self, text: &str) -> Result<(), ActionError> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ActionError::ClipboardUnavailable("no clipboard backend".into()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ActionError::ClipboardWrite(e.to_string()))
    }
}

impl Default for ClipboardHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A downloadable blob: the untouched original text, the file name derived
/// from the locator's final path segment, and a MIME hint from the kind
/// discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Build the download request for a payload. Pure pass-through: the bytes
/// are the original text, never a re-serialized form.
pub fn download_request(payload: &Payload) -> DownloadRequest {
    DownloadRequest {
        file_name: payload.file_name().to_string(),
        mime: payload.kind().mime_hint(),
        bytes: payload.text().as_bytes().to_vec(),
    }
}

/// Write a download request into a directory, returning the written path.
pub fn write_download(request: &DownloadRequest, dir: &Path) -> Result<PathBuf, ActionError> {
    let path = dir.join(&request.file_name);
    std::fs::write(&path, &request.bytes)?;
    log::debug!(
        "wrote {} byte download ({}) to {}",
        request.bytes.len(),
        request.mime,
        path.display()
    );
    Ok(path)
}
