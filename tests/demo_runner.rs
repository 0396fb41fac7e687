use std::sync::Arc;

use serde_json::json;

use array_methods::demos::helpers::titles_of_places_with_pool;
use array_methods::demos::{samples, DemoOptions, DemoRunner};
use array_methods::report::{DemoEvent, RecordingReporter, Reporter, Section};

fn recorded_run() -> Arc<RecordingReporter> {
    let recorder = Arc::new(RecordingReporter::new());
    let reporter: Arc<dyn Reporter> = recorder.clone();
    DemoRunner::new(DemoOptions::default())
        .with_reporter(reporter)
        .run_all()
        .unwrap();
    recorder
}

#[test]
fn run_all_reports_every_section_in_order() {
    let recorder = recorded_run();
    let started: Vec<Section> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            DemoEvent::SectionStarted { section } => Some(section),
            _ => None,
        })
        .collect();
    assert_eq!(started, Section::ALL.to_vec());
}

#[test]
fn map_section_results() {
    let r = recorded_run();
    assert_eq!(r.result("doubled"), Some(json!([2, 4, 6, 8, 10])));
    assert_eq!(r.result("doubled_with_loop"), r.result("doubled"));
    assert_eq!(
        r.result("prefixed_names"),
        Some(json!(["mr. john", "mr. paul", "mr. george", "mr. ringo"]))
    );
    assert_eq!(
        r.result("student_totals").unwrap()[0],
        json!({"name": "Tony Parker", "total": 155})
    );
}

#[test]
fn reduce_section_results() {
    let r = recorded_run();
    assert_eq!(r.result("sum"), Some(json!(23)));
    assert_eq!(r.result("word_lengths"), Some(json!(9)));
    assert_eq!(r.result("total_age"), Some(json!(142)));
    assert_eq!(r.result("total_rate"), Some(json!(16)));
}

#[test]
fn filter_section_results() {
    let r = recorded_run();
    assert_eq!(r.result("evens"), Some(json!([2, 4, 6, 8, 10])));
    assert_eq!(r.result("larger_than_three"), Some(json!([4, 5, 6, 7, 8, 9, 10])));

    let above = r.result("above_300").unwrap();
    assert_eq!(above.as_array().map(Vec::len), Some(2));
    assert_eq!(above[0]["type"], "Entire Place");

    let expected: Vec<String> = titles_of_places_with_pool(&samples::places()).into_vec();
    assert_eq!(r.result("titles_with_pool"), Some(json!(expected)));
}

#[test]
fn string_and_sort_section_results() {
    let r = recorded_run();
    assert_eq!(r.result("message_reversed"), Some(json!("dlrow olleh")));
    assert_eq!(r.result("occurrences_of_o"), Some(json!(2)));
    assert_eq!(r.result("cities"), Some(json!(["barcelona", "berlin", "lissabon"])));
    assert_eq!(r.result("numbers_lexicographic"), Some(json!([12, 23, 45, 7])));
    assert_eq!(r.result("numbers_ascending"), Some(json!([7, 12, 23, 45])));

    let names: Vec<_> = r
        .result("reviews")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("baz"), json!("bar"), json!("foo")]);
}

#[test]
fn for_each_section_visits_with_index_and_sequence() {
    let r = recorded_run();
    let visits: Vec<(usize, serde_json::Value)> = r
        .events()
        .into_iter()
        .filter_map(|e| match e {
            DemoEvent::Visited {
                index,
                element,
                sequence,
            } => {
                assert_eq!(sequence, json!([3, 6, 9]));
                Some((index, element))
            }
            _ => None,
        })
        .collect();
    assert_eq!(visits, vec![(0, json!(3)), (1, json!(6)), (2, json!(9))]);
}

#[test]
fn run_all_returns_outcomes_matching_reported_results() {
    let recorder = Arc::new(RecordingReporter::new());
    let reporter: Arc<dyn Reporter> = recorder.clone();
    let outcomes = DemoRunner::new(DemoOptions::default())
        .with_reporter(reporter)
        .run_all()
        .unwrap();

    assert!(!outcomes.is_empty());
    for o in &outcomes {
        assert_eq!(recorder.result(&o.label), Some(o.value.clone()));
    }
}

#[test]
fn runner_without_reporter_still_returns_outcomes() {
    let outcomes = DemoRunner::new(DemoOptions::default())
        .run_section(Section::Strings)
        .unwrap();
    let labels: Vec<&str> = outcomes.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["characters", "reversed", "message_reversed", "occurrences_of_o"]
    );
}
