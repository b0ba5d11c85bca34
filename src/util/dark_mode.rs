//! Ambient theme detection and theme application.
//!
//! Reads the platform's `prefers-color-scheme` and applies a `data-theme`
//! attribute to the `<html>` element. Persisting the user's choice is the
//! job of `util::persistence`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Native builds safely no-op so the store and tests stay deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `data-theme` attribute value for `enabled`.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Whether the platform prefers a dark color scheme.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(enabled));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
