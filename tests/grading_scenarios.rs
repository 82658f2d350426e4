use approx::assert_relative_eq;
use drawlines::grading::{DefinitionError, HintFeedback, ZoneEnd};
use drawlines::{GradeMethod, GradedState, QuestionDefinition, Response, ThresholdClassifier};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_question() -> QuestionDefinition {
    QuestionDefinition::load_from_file(&fixture("two_segments.toml"), 10.0)
        .expect("Fixture-Frage sollte laden")
}

fn load_responses() -> Vec<Response> {
    let content = std::fs::read_to_string(fixture("two_segments_responses.json"))
        .expect("Fixture-Antworten lesbar");
    serde_json::from_str(&content).expect("Antworten als JSON-Array erwartet")
}

#[test]
fn fixture_question_loads_with_moodle_field_names() {
    let question = load_question();

    assert_eq!(question.line_count(), 2);
    assert_eq!(question.grade_method, GradeMethod::Partial);
    assert!(question.show_num_correct && question.show_misplaced);
    assert_eq!(question.lines[0].labels.start, "A");
    assert_eq!(question.lines[1].labels.middle, "Achse");
    assert_eq!(question.lines[1].zone.end.tolerance, 12.0);
    assert_eq!(question.expected_data(), vec!["c0", "c1"]);
}

#[test]
fn recorded_responses_grade_as_expected() {
    let question = load_question();
    let responses = load_responses();
    let classifier = ThresholdClassifier::default();

    let results: Vec<_> = responses
        .iter()
        .map(|r| question.grade_response(r, &classifier))
        .collect();

    assert_relative_eq!(results[0].fraction, 1.0);
    assert_eq!(results[0].state, GradedState::GradedRight);
    // Vier Punkte einer Geraden: bewertet werden nur die inneren Griffe
    assert_relative_eq!(results[1].fraction, 0.75);
    assert_eq!(results[1].state, GradedState::GradedPartial);
    assert_relative_eq!(results[2].fraction, 0.25);
    // Unlesbarer Startpunkt zählt als falsch, der Rest wird weiter bewertet
    assert_relative_eq!(results[3].fraction, 0.25);

    assert_relative_eq!(question.compute_final_grade(&responses, 4), 2.25);
}

#[test]
fn all_or_none_counts_only_fully_correct_lines() {
    let mut question = load_question();
    question.grade_method = GradeMethod::AllNone;
    let responses = load_responses();

    assert_relative_eq!(question.fraction(&responses[0]), 1.0);
    assert_relative_eq!(question.fraction(&responses[1]), 0.5);
    assert_relative_eq!(question.fraction(&responses[2]), 0.0);
}

#[test]
fn hint_feedback_reports_count_and_misplaced_lines() {
    let question = load_question();
    let responses = load_responses();

    assert_eq!(
        question.hint_feedback(&responses[2]),
        HintFeedback {
            num_parts_right: Some((1, 4)),
            misplaced_lines: vec![1],
        }
    );
}

#[test]
fn summary_lists_answered_lines_in_order() {
    let question = load_question();
    let responses = load_responses();

    assert_eq!(
        question.summarise_response(&responses[0]),
        "Line 1: 10,10 300,10, Line 2: 10,200 300,200"
    );
    assert_eq!(
        question.right_answer_summary(),
        "Line 1: 10,10 300,10, Line 2: 10,200 300,200"
    );
}

#[test]
fn clearing_wrong_lines_keeps_fully_correct_ones() {
    let question = load_question();
    let responses = load_responses();

    let cleared = question.clear_wrong_from_response(&responses[1]);

    assert_eq!(cleared.get("c0"), None);
    assert!(cleared.get("c1").is_some());
}

#[test]
fn missing_zone_is_fatal_at_load_time() {
    let content = r#"
[[lines]]
number = 1
zonestart = "10,10;5"
"#;
    let err = QuestionDefinition::from_toml_str(content, 10.0)
        .expect_err("fehlende Zone muss abgelehnt werden");

    assert_eq!(
        err.downcast_ref::<DefinitionError>(),
        Some(&DefinitionError::MissingZone {
            number: 1,
            which: ZoneEnd::End
        })
    );
}

#[test]
fn unknown_line_type_is_rejected() {
    let content = r#"
[[lines]]
number = 1
type = "zigzag"
zonestart = "10,10"
zoneend = "20,20"
"#;
    assert!(QuestionDefinition::from_toml_str(content, 10.0).is_err());
}
