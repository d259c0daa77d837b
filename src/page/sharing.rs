//! Share field text and clipboard access.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{lock, PageError};

/// Placeholder shown in the share field when sharing failed.
pub const SHARE_ERROR: &str = "Error sharing code. Please try again.";

/// How long the "copied" tooltip stays up after a click.
pub const TOOLTIP_DURATION: Duration = Duration::from_secs(2);

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), PageError>;
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        lock(&self.contents).clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PageError> {
        *lock(&self.contents) = Some(text.to_string());
        Ok(())
    }
}

/// Share field text for the outcome of a share request.
pub fn share_field_text(result: Result<String, PageError>) -> String {
    match result {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(error = %e, "error sharing code");
            SHARE_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_field_text() {
        assert_eq!(
            share_field_text(Ok("https://go.dev/play/p/abc".to_string())),
            "https://go.dev/play/p/abc"
        );
        assert_eq!(share_field_text(Err(PageError::Status(502))), SHARE_ERROR);
        assert_eq!(
            share_field_text(Err(PageError::Decode("eof".into()))),
            SHARE_ERROR
        );
    }

    #[tokio::test]
    async fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("copied").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("copied"));
    }
}
