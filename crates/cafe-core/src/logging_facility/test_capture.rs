//! In-memory event capture for tests
//!
//! One capture layer is installed as the global subscriber per test binary.
//! Tests run in parallel and share it, so look events up by an operation
//! name or entity id that only your test uses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};

/// One recorded event: its level and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// `start`, `end` or `end_error` for boundary events
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }
}

// Integers and bools arrive through `record_debug`, whose output matches
// their Display form; only strings need their own arm to drop the quotes.
struct FieldText<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldText<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer(Buffer);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldText(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        if let Ok(mut events) = self.0.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture(Buffer);

impl TestCapture {
    /// Every event logged for `op`, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.matching(|e| e.op() == Some(op))
    }

    /// Boundary events of one kind (`start`, `end`, `end_error`) for `op`
    pub fn boundary(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.matching(|e| e.op() == Some(op) && e.event() == Some(event))
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.matching(predicate).len()
    }

    fn matching<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.0
            .lock()
            .map(|events| events.iter().filter(|e| predicate(e)).cloned().collect())
            .unwrap_or_default()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer on first use and return the shared handle
///
/// ```
/// use cafe_core::logging_facility::test_capture::init_test_capture;
/// use cafe_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// assert_eq!(capture.boundary("doc_example_op", "start").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer(buffer.clone()))
                .init();
            TestCapture(buffer)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_read_schema_fields() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_OP.to_string(), "by_order_id".to_string());
        fields.insert(FIELD_EVENT.to_string(), "start".to_string());
        fields.insert("order_id".to_string(), "4".to_string());
        let event = CapturedEvent {
            level: Level::INFO,
            fields,
        };

        assert_eq!(event.op(), Some("by_order_id"));
        assert_eq!(event.event(), Some("start"));
        assert_eq!(event.field("order_id"), Some("4"));
        assert_eq!(event.component(), None);
    }
}
