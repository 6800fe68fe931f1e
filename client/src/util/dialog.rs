//! Blocking browser alert dialog. Requires a browser environment; SSR
//! paths safely no-op.

/// Show a blocking alert with `message`. Failures are terminal for the
/// user action that raised them, so the flow stops here until dismissed.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
