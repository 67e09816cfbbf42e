use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing`, tagging each event with
/// the component that emitted it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("app")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "meal_planner", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "meal_planner", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "meal_planner", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "meal_planner", component = self.component, "{}", message);
    }
}
