//! Event capture for asserting on emitted `tracing` events in unit tests.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};

/// One recorded event.
#[derive(Debug, Clone)]
pub(crate) struct Captured {
	pub level: Level,
	pub message: String,
	pub fields: Vec<(&'static str, String)>,
}

impl Captured {
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
	}
}

#[derive(Default)]
struct FieldVisitor {
	message: String,
	fields: Vec<(&'static str, String)>,
}

impl Visit for FieldVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			self.fields.push((field.name(), format!("{value:?}")));
		}
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_string();
		} else {
			self.fields.push((field.name(), value.to_string()));
		}
	}
}

struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

impl<S: Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = FieldVisitor::default();
		event.record(&mut visitor);
		self.0.lock().push(Captured {
			level: *event.metadata().level(),
			message: visitor.message,
			fields: visitor.fields,
		});
	}
}

/// Runs `f` under a thread-local subscriber and returns what it logged.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
	let events = Arc::new(Mutex::new(Vec::new()));
	let subscriber = tracing_subscriber::registry().with(CaptureLayer(Arc::clone(&events)));
	let result = tracing::subscriber::with_default(subscriber, f);
	let captured = std::mem::take(&mut *events.lock());
	(result, captured)
}
