use std::sync::Arc;

use crate::config::{ConvertOptions, UnitMode};

pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Per-invocation state threaded through every derivation call.
///
/// Carries the document dimensions (read-only, shared by all layers) and the
/// log sink, so the engine holds no ambient/global state and independent
/// conversions can run concurrently.
#[derive(Clone)]
pub struct ConvertContext {
    pub doc_width: f64,
    pub doc_height: f64,
    pub units: UnitMode,
    log: Option<LogCallback>,
}

impl ConvertContext {
    pub fn new(doc_width: u32, doc_height: u32, options: &ConvertOptions) -> Self {
        let log: Option<LogCallback> = if options.logging {
            Some(Arc::new(|msg: &str| eprintln!("{msg}")))
        } else {
            None
        };
        Self {
            doc_width: doc_width as f64,
            doc_height: doc_height as f64,
            units: options.units,
            log,
        }
    }

    /// Replace the default stderr sink, e.g. to capture messages in tests.
    pub fn with_log_sink(mut self, sink: LogCallback) -> Self {
        self.log = Some(sink);
        self
    }

    pub fn log(&self, message: &str) {
        if let Some(sink) = &self.log {
            sink(message);
        }
    }
}

impl std::fmt::Debug for ConvertContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertContext")
            .field("doc_width", &self.doc_width)
            .field("doc_height", &self.doc_height)
            .field("units", &self.units)
            .field("log", &self.log.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn log_is_silent_without_sink() {
        let ctx = ConvertContext::new(100, 100, &ConvertOptions::default());
        ctx.log("dropped"); // must not panic, goes nowhere
    }

    #[test]
    fn log_reaches_installed_sink() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink_store = captured.clone();
        let ctx = ConvertContext::new(100, 100, &ConvertOptions::default()).with_log_sink(
            Arc::new(move |msg: &str| sink_store.lock().unwrap().push(msg.to_string())),
        );

        ctx.log("layer 'title' failed");
        let messages = captured.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("title"));
    }
}
