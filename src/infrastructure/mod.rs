pub mod http;
pub mod map;
pub mod rendering;
pub mod services;

/// Direct DOM helpers kept out of the domain and application layers
pub mod ui {
    use crate::domain::logging::LogComponent;
    use crate::log_warn;

    /// Blocking alert; falls back to the log when the window refuses.
    pub fn alert(message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log_warn!(LogComponent::Infrastructure("UI"), "Alert not shown: {}", message);
        }
    }
}
