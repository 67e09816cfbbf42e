/// Logging port for the business layer.
///
/// Services and use cases receive an `Arc<dyn Logger>`; the concrete sink is
/// chosen by the binary that wires the application.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
