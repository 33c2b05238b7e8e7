/// The host-environment notification primitive.
///
/// Widgets never talk to a real dialog mechanism directly; they are handed a
/// `Host` at dispatch time. Outside a UI shell the default is [`TracingHost`],
/// and test harnesses substitute a recording implementation.
pub trait Host {
    /// Blocking notification with a single message. From the widget's point of
    /// view the call completes before the event handler continues.
    fn alert(&mut self, message: &str);
}

/// Default host for headless use: surfaces notifications on the log.
#[derive(Debug, Default)]
pub struct TracingHost;

impl Host for TracingHost {
    fn alert(&mut self, message: &str) {
        tracing::info!("alert: {}", message);
    }
}
