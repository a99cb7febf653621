/// Side channel for user-visible failure notices.
///
/// The catalog client never surfaces transport or provider failures to its
/// caller as errors; it reports them here and returns an empty result. The
/// UI layer supplies an implementation that renders the notice.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default notifier: routes notices to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
