use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Clipboard capability: one text write per user-initiated copy action.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardAccess: Send {
    fn write_text(&mut self, content: &str) -> Result<(), ClipboardError>;
}

/// [`ClipboardAccess`] backed by the system clipboard through `arboard`.
///
/// The underlying clipboard handle is created lazily on first write so the
/// app still starts on hosts without a usable clipboard; the failure then
/// surfaces as a notice on copy instead.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardAccess for SystemClipboard {
    fn write_text(&mut self, content: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
            self.inner = Some(clipboard);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(content.to_string())
                .map_err(|error| ClipboardError::WriteFailed(error.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clipboard_starts_without_handle() {
        // Arrange & Act
        let clipboard = SystemClipboard::new();

        // Assert
        assert!(clipboard.inner.is_none());
    }

    #[test]
    fn test_clipboard_error_messages() {
        // Arrange
        let unavailable = ClipboardError::Unavailable("no display".to_string());
        let write_failed = ClipboardError::WriteFailed("denied".to_string());

        // Act & Assert
        assert_eq!(unavailable.to_string(), "clipboard is unavailable: no display");
        assert_eq!(write_failed.to_string(), "failed to write to clipboard: denied");
    }
}
