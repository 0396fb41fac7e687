//! Collection transform demonstrator.
//!
//! [`DemoRunner`] applies one transform per example to the fixed inputs in [`samples`] and hands
//! every result to a [`Reporter`]. Sections run in a fixed order (see [`Section::ALL`]); each
//! builds its own inputs, so sections can also be run on their own.

pub mod helpers;
pub mod samples;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{TransformError, TransformResult};
use crate::processing::{
    ascending, by_rate_then_score, count_occurrences, filter, for_each, join, map, map_with_loop,
    reduce, reverse, sort, sort_lexicographic, split,
};
use crate::report::{DemoEvent, OutputStyle, Reporter, Section};

/// Configuration for the [`DemoRunner`].
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Emit a [`DemoEvent::ReduceStep`] for every combine call of the seedless sum.
    pub trace_reduce: bool,
    /// Rendering style for stdout reporting.
    pub output_style: OutputStyle,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            trace_reduce: true,
            output_style: OutputStyle::Compact,
        }
    }
}

/// A single reported demo result.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub section: Section,
    pub label: String,
    pub value: Value,
}

/// Runs demo sections and reports their results.
pub struct DemoRunner {
    opts: DemoOptions,
    reporter: Option<Arc<dyn Reporter>>,
}

impl DemoRunner {
    /// Create a runner with no reporter attached.
    pub fn new(opts: DemoOptions) -> Self {
        Self {
            opts,
            reporter: None,
        }
    }

    /// Attach a reporter for demo events.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Run every section in order. Stops at the first failing section.
    pub fn run_all(&self) -> TransformResult<Vec<DemoOutcome>> {
        let mut out = Vec::new();
        for section in Section::ALL {
            out.extend(self.run_section(section)?);
        }
        Ok(out)
    }

    /// Run a single section.
    pub fn run_section(&self, section: Section) -> TransformResult<Vec<DemoOutcome>> {
        self.emit(DemoEvent::SectionStarted { section });

        let mut results = SectionResults::new(self, section);
        match section {
            Section::Map => self.run_map(&mut results)?,
            Section::Reduce => self.run_reduce(&mut results)?,
            Section::Filter => self.run_filter(&mut results)?,
            Section::Strings => self.run_strings(&mut results)?,
            Section::Sort => self.run_sort(&mut results)?,
            Section::ForEach => self.run_for_each(&mut results)?,
        }

        let outcomes = results.finish();
        self.emit(DemoEvent::SectionFinished {
            section,
            results: outcomes.len(),
        });
        Ok(outcomes)
    }

    fn run_map(&self, results: &mut SectionResults<'_>) -> TransformResult<()> {
        let numbers = samples::numbers();
        results.record("doubled", &map(&numbers, |n| n * 2))?;
        results.record("doubled_with_loop", &map_with_loop(&numbers, |n| n * 2))?;

        let beatles = samples::beatles();
        results.record("prefixed_names", &helpers::prefix_names(&beatles, "mr. "))?;

        let students = samples::students();
        results.record("student_names", &helpers::student_names(&students))?;
        results.record("student_totals", &helpers::student_totals(&students))?;
        Ok(())
    }

    fn run_reduce(&self, results: &mut SectionResults<'_>) -> TransformResult<()> {
        let numbers = samples::numbers_to_sum();
        let sum = reduce(&numbers, |acc, n| {
            if self.opts.trace_reduce {
                self.emit(DemoEvent::ReduceStep {
                    accumulator: Value::from(acc),
                    value: Value::from(*n),
                });
            }
            acc + n
        });
        let sum = results.check("sum", sum)?;
        results.record("sum", &sum)?;

        results.record("word_lengths", &helpers::total_length(&samples::words()))?;
        results.record("total_age", &helpers::total_age(&samples::people()))?;
        results.record("total_rate", &helpers::total_review_rate(&samples::product()))?;
        Ok(())
    }

    fn run_filter(&self, results: &mut SectionResults<'_>) -> TransformResult<()> {
        let numbers = samples::one_to_ten();
        results.record("evens", &filter(&numbers, |n| n % 2 == 0))?;
        results.record("larger_than_three", &filter(&numbers, |n| *n > 3))?;

        let places = samples::places();
        results.record("above_300", &helpers::places_above(&places, 300))?;
        results.record("titles_with_pool", &helpers::titles_of_places_with_pool(&places))?;
        Ok(())
    }

    fn run_strings(&self, results: &mut SectionResults<'_>) -> TransformResult<()> {
        let mut arr = split(samples::MESSAGE, "");
        results.record("characters", &arr)?;

        reverse(&mut arr);
        results.record("reversed", &arr)?;
        results.record("message_reversed", &join(&arr, ""))?;

        results.record("occurrences_of_o", &count_occurrences(samples::GREETING, 'o'))?;
        Ok(())
    }

    fn run_sort(&self, results: &mut SectionResults<'_>) -> TransformResult<()> {
        let mut cities = samples::cities();
        results.record("cities", &*sort_lexicographic(&mut cities))?;

        let mut numbers = samples::unsorted_numbers();
        results.record("numbers_lexicographic", &*sort_lexicographic(&mut numbers))?;
        results.record("numbers_ascending", &*sort(&mut numbers, ascending))?;

        let mut reviews = samples::reviews();
        results.record("reviews", &*sort(&mut reviews, by_rate_then_score))?;
        Ok(())
    }

    fn run_for_each(&self, _results: &mut SectionResults<'_>) -> TransformResult<()> {
        let array = samples::visit_array();
        let sequence = serde_json::to_value(&array)?;
        for_each(&array, |el, index, _all| {
            self.emit(DemoEvent::Visited {
                index,
                element: Value::from(*el),
                sequence: sequence.clone(),
            });
        });
        Ok(())
    }

    fn emit(&self, event: DemoEvent) {
        if let Some(r) = &self.reporter {
            r.on_event(&event);
        }
    }
}

struct SectionResults<'a> {
    runner: &'a DemoRunner,
    section: Section,
    outcomes: Vec<DemoOutcome>,
}

impl<'a> SectionResults<'a> {
    fn new(runner: &'a DemoRunner, section: Section) -> Self {
        Self {
            runner,
            section,
            outcomes: Vec::new(),
        }
    }

    fn record<T: Serialize + ?Sized>(&mut self, label: &str, value: &T) -> TransformResult<()> {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => return Err(self.fail(label, e.into())),
        };
        self.runner.emit(DemoEvent::Result {
            section: self.section,
            label: label.to_string(),
            value: value.clone(),
        });
        self.outcomes.push(DemoOutcome {
            section: self.section,
            label: label.to_string(),
            value,
        });
        Ok(())
    }

    /// Pass a fallible result through, reporting the failure under `label`.
    fn check<T>(&self, label: &str, result: TransformResult<T>) -> TransformResult<T> {
        result.map_err(|e| self.fail(label, e))
    }

    fn fail(&self, label: &str, error: TransformError) -> TransformError {
        self.runner.emit(DemoEvent::Failed {
            section: self.section,
            label: label.to_string(),
            error: error.to_string(),
        });
        error
    }

    fn finish(self) -> Vec<DemoOutcome> {
        self.outcomes
    }
}
