//! Tests for tracing integration.

use std::fmt;
use std::sync::{Arc, Mutex};

use outcome_rail::tracing_ext::OutcomeTracingExt;
use outcome_rail::{msg, Outcome};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    span: Option<String>,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct FieldRecorder(Vec<(String, String)>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut fields = FieldRecorder::default();
        event.record(&mut fields);
        let span = ctx.event_span(event).map(|span| span.name().to_string());

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            span,
            fields: fields.0,
        });
    }
}

/// Runs `f` with a subscriber that records every event, returning them.
fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, f);

    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn trace_failure_passes_success_through_silently() {
    let mut result = None;
    let events = capture(|| {
        result = Some(Outcome::<i32, &str>::success(42).trace_failure("load"));
    });

    assert_eq!(result, Some(Outcome::Success(42)));
    assert!(events.is_empty());
}

#[test]
fn trace_failure_emits_one_warning_and_keeps_error() {
    let mut result = None;
    let events = capture(|| {
        result = Some(Outcome::<i32, &str>::failure("boom").trace_failure("load"));
    });

    assert_eq!(result, Some(Outcome::Failure("boom")));
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.field("operation"), Some("load"));
    assert_eq!(event.field("error"), Some("boom"));
    assert_eq!(event.field("message"), Some("operation failed"));
}

#[test]
fn trace_outcome_logs_success_at_debug() {
    let mut result = None;
    let events = capture(|| {
        result = Some(Outcome::<i32, &str>::success(1).trace_outcome("step"));
    });

    assert_eq!(result, Some(Outcome::Success(1)));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field("operation"), Some("step"));
    assert_eq!(events[0].field("error"), None);
}

#[test]
fn trace_outcome_logs_boxed_failure_at_warn() {
    let mut result: Option<Outcome<i32>> = None;
    let events = capture(|| {
        result = Some(Outcome::failure(msg("bad input")).trace_outcome("step"));
    });

    let err = result.and_then(Outcome::into_failure).map(|e| e.to_string());
    assert_eq!(err, Some("bad input".to_string()));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].field("operation"), Some("step"));
    assert_eq!(events[0].field("error"), Some("bad input"));
}

#[test]
fn trace_in_span_records_failure_inside_span() {
    let mut result = None;
    let events = capture(|| {
        let span = tracing::info_span!("persist");
        result = Some(Outcome::<i32, &str>::failure("disk full").trace_in_span(&span, "save"));
    });

    assert_eq!(result, Some(Outcome::Failure("disk full")));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].span.as_deref(), Some("persist"));
    assert_eq!(events[0].field("operation"), Some("save"));
    assert_eq!(events[0].field("error"), Some("disk full"));
}

#[test]
fn trace_in_span_skips_success() {
    let mut result = None;
    let events = capture(|| {
        let span = tracing::info_span!("persist");
        result = Some(Outcome::<i32, &str>::success(7).trace_in_span(&span, "save"));
    });

    assert_eq!(result, Some(Outcome::Success(7)));
    assert!(events.is_empty());
}
