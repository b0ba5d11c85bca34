//! System clipboard writes.

#![allow(clippy::unused_async)]

/// The browser refused or could not perform the write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Write `text` to the system clipboard as plain text.
///
/// # Errors
///
/// Returns `ClipboardError` when there is no window, the permission is
/// denied, or the build has no browser (`csr` off).
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".to_owned()))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError(format!("{e:?}")))?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(ClipboardError("clipboard unavailable outside the browser".to_owned()))
    }
}
