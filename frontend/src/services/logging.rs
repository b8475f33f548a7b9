/// Component-tagged logging on top of the `log` facade
///
/// The component name becomes the log target, so console output reads
/// `[life-form] ...`. `init` wires the facade to the browser console.
pub struct Logger;

impl Logger {
    /// Install the console logger and panic hook; safe to call more than once
    pub fn init(level: log::Level) {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(level);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}
