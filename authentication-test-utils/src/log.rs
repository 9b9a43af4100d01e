//! Log capture for asserting on emitted `tracing` events.
//!
//! `LogCapture` is a `tracing_subscriber::Layer` that records every event it sees.
//! Install it as the thread-local default subscriber for the duration of a test:
//!
//! ```ignore
//! let capture = LogCapture::new();
//! let _guard = capture.set_default();
//!
//! user_repo.save(user).await?;
//!
//! assert_eq!(
//!     capture.output("users.models", tracing::Level::INFO),
//!     vec!["INFO:users.models:Saving user instance: testuser"]
//! );
//! ```
//!
//! `#[tokio::test]` runs on a current-thread runtime, so events emitted across
//! `.await` points are still delivered to the thread-local subscriber.

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    field::{Field, Visit},
    subscriber::DefaultGuard,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer, Registry,
};

/// A single captured event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLog {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl CapturedLog {
    /// Render as `LEVEL:target:message`.
    pub fn output(&self) -> String {
        format!("{}:{}:{}", self.level, self.target, self.message)
    }
}

#[derive(Clone, Default)]
pub struct LogCapture {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this capture as the default subscriber for the current thread.
    ///
    /// Events are captured until the returned guard is dropped.
    pub fn set_default(&self) -> DefaultGuard {
        let subscriber = Registry::default().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    /// All captured events, in emission order.
    pub fn logs(&self) -> Vec<CapturedLog> {
        self.logs
            .lock()
            .map(|logs| logs.clone())
            .unwrap_or_default()
    }

    /// Events on `target` at `level` or more severe, in emission order.
    pub fn logs_for(&self, target: &str, level: Level) -> Vec<CapturedLog> {
        self.logs()
            .into_iter()
            // More verbose levels compare greater in tracing
            .filter(|log| log.target == target && log.level <= level)
            .collect()
    }

    /// Rendered `LEVEL:target:message` lines for `target` at `level` or more severe.
    pub fn output(&self, target: &str, level: Level) -> Vec<String> {
        self.logs_for(target, level)
            .iter()
            .map(CapturedLog::output)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl<S> Layer<S> for LogCapture
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(CapturedLog {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message,
            });
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn captures_message_target_and_level() {
        let capture = LogCapture::new();
        {
            let _guard = capture.set_default();
            tracing::info!(target: "users.models", "Saving user instance: {}", "testuser");
            tracing::debug!(target: "users.models", "not at info");
            tracing::warn!(target: "other", "unrelated");
        }

        assert_eq!(capture.logs().len(), 3);
        assert_eq!(
            capture.output("users.models", Level::INFO),
            vec!["INFO:users.models:Saving user instance: testuser".to_string()]
        );
    }

    #[test]
    fn stops_capturing_after_guard_drops() {
        let capture = LogCapture::new();
        {
            let _guard = capture.set_default();
            tracing::info!("captured");
        }
        tracing::info!("not captured");

        assert_eq!(capture.logs().len(), 1);
        assert_eq!(capture.logs()[0].message, "captured");
    }
}
