//! Reporting facility for demo results.
//!
//! The demo runner only produces values. Rendering is delegated to a [`Reporter`], which receives
//! a [`DemoEvent`] for every section boundary, result, reduce step, visit and failure.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Demonstrator sections, in the order [`crate::demos::DemoRunner::run_all`] runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Map,
    Reduce,
    Filter,
    Strings,
    Sort,
    ForEach,
}

impl Section {
    /// All sections in run order.
    pub const ALL: [Section; 6] = [
        Section::Map,
        Section::Reduce,
        Section::Filter,
        Section::Strings,
        Section::Sort,
        Section::ForEach,
    ];

    /// Display name used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            Section::Map => "map",
            Section::Reduce => "reduce",
            Section::Filter => "filter",
            Section::Strings => "split/reverse/join",
            Section::Sort => "sort",
            Section::ForEach => "forEach",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Events emitted by the demo runner.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    SectionStarted { section: Section },
    /// One combine call of a traced reduce.
    ReduceStep { accumulator: Value, value: Value },
    /// One `for_each` visit.
    Visited { index: usize, element: Value, sequence: Value },
    Result { section: Section, label: String, value: Value },
    Failed { section: Section, label: String, error: String },
    SectionFinished { section: Section, results: usize },
}

/// Observer hook for demo events.
pub trait Reporter: Send + Sync {
    /// Called once per event, in emission order.
    fn on_event(&self, event: &DemoEvent);
}

/// How [`StdOutReporter`] renders structured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Indented, multi-line JSON.
    Pretty,
}

/// Prints results to stdout, one entry per event.
#[derive(Debug, Default)]
pub struct StdOutReporter {
    style: OutputStyle,
}

impl StdOutReporter {
    /// Create a reporter that renders values in `style`.
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }

    /// Text printed for `event`. Multi-line events are joined with `\n`; a finished section
    /// renders as an empty line.
    pub fn format_event(&self, event: &DemoEvent) -> String {
        match event {
            DemoEvent::SectionStarted { section } => format!("== {section} =="),
            DemoEvent::ReduceStep { accumulator, .. } => {
                format!("acc is: {}", self.render(accumulator))
            }
            DemoEvent::Visited {
                index,
                element,
                sequence,
            } => format!(
                "index: {index}\nel: {}\narr: {}",
                self.render(element),
                self.render(sequence)
            ),
            DemoEvent::Result { label, value, .. } => format!("{label}: {}", self.render(value)),
            DemoEvent::Failed { label, error, .. } => format!("{label}: failed: {error}"),
            DemoEvent::SectionFinished { .. } => String::new(),
        }
    }

    fn render(&self, value: &Value) -> String {
        render_value(value, self.style)
    }
}

impl Reporter for StdOutReporter {
    fn on_event(&self, event: &DemoEvent) {
        println!("{}", self.format_event(event));
    }
}

/// A reporter that fans out events to a list of reporters.
#[derive(Default)]
pub struct CompositeReporter {
    reporters: Vec<Arc<dyn Reporter>>,
}

impl CompositeReporter {
    /// Create a composite from a list of reporters, called in list order.
    pub fn new(reporters: Vec<Arc<dyn Reporter>>) -> Self {
        Self { reporters }
    }
}

impl fmt::Debug for CompositeReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeReporter")
            .field("reporters_len", &self.reporters.len())
            .finish()
    }
}

impl Reporter for CompositeReporter {
    fn on_event(&self, event: &DemoEvent) {
        for r in &self.reporters {
            r.on_event(event);
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<DemoEvent>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far.
    pub fn events(&self) -> Vec<DemoEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// The value reported under `label`, if any.
    pub fn result(&self, label: &str) -> Option<Value> {
        self.events().into_iter().find_map(|event| match event {
            DemoEvent::Result { label: l, value, .. } if l == label => Some(value),
            _ => None,
        })
    }
}

impl Reporter for RecordingReporter {
    fn on_event(&self, event: &DemoEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

fn render_value(value: &Value, style: OutputStyle) -> String {
    let rendered = match style {
        OutputStyle::Compact => serde_json::to_string(value),
        OutputStyle::Pretty => serde_json::to_string_pretty(value),
    };
    // Serializing a `serde_json::Value` cannot fail; fall back to its Display form regardless.
    rendered.unwrap_or_else(|_| value.to_string())
}
