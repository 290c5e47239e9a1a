use super::common::{capitalization_issues, frequency, plain_metrics, report};
use crate::pipeline::evaluation::Dimension;
use crate::pipeline::feedback::areas::{band, build};
use crate::pipeline::feedback::{ImprovementArea, Priority};

fn find<'a>(areas: &'a [ImprovementArea], name: &str) -> Option<&'a ImprovementArea> {
    areas.iter().find(|area| area.area == name)
}

#[test]
fn band_edges() {
    assert_eq!(band(0.39), Priority::High);
    assert_eq!(band(0.4), Priority::Medium);
    assert_eq!(band(0.59), Priority::Medium);
    assert_eq!(band(0.6), Priority::Low);
}

#[test]
fn dimensions_below_cut_become_banded_areas() {
    let evaluation = report(&[
        (Dimension::Structure, 0.39),
        (Dimension::Creativity, 0.4),
        (Dimension::Accuracy, 0.59),
        (Dimension::Presentation, 0.6),
        (Dimension::Clarity, 0.7),
    ]);
    let areas = build(&plain_metrics(), &evaluation);

    assert_eq!(areas.len(), 4);
    assert_eq!(find(&areas, "Structure").unwrap().priority, Priority::High);
    assert_eq!(find(&areas, "Creativity").unwrap().priority, Priority::Medium);
    assert_eq!(find(&areas, "Accuracy").unwrap().priority, Priority::Medium);
    assert_eq!(find(&areas, "Presentation").unwrap().priority, Priority::Low);
    assert!(find(&areas, "Clarity").is_none());
    assert_eq!(
        find(&areas, "Structure").unwrap().description,
        "Structure feedback"
    );
}

#[test]
fn grammar_area_appears_only_with_issues() {
    let evaluation = report(&[(Dimension::Clarity, 0.9)]);
    assert!(build(&plain_metrics(), &evaluation).is_empty());

    let mut metrics = plain_metrics();
    metrics.grammar_issues = capitalization_issues(1);
    let areas = build(&metrics, &evaluation);
    let grammar = find(&areas, "Grammar & Style").expect("grammar area");
    assert_eq!(grammar.priority, Priority::Medium);
    assert!((grammar.score - 0.8).abs() < 1e-9);
    assert!(grammar.description.starts_with("1 grammar issue(s) across 5"));

    metrics.grammar_issues = capitalization_issues(2);
    let areas = build(&metrics, &evaluation);
    assert_eq!(
        find(&areas, "Grammar & Style").unwrap().priority,
        Priority::High
    );
}

#[test]
fn low_diversity_adds_vocabulary_area() {
    let evaluation = report(&[]);
    let mut metrics = plain_metrics();

    metrics.vocabulary.diversity = 0.4;
    assert!(find(&build(&metrics, &evaluation), "Vocabulary & Word Choice").is_none());

    metrics.vocabulary.diversity = 0.39;
    let areas = build(&metrics, &evaluation);
    let vocabulary = find(&areas, "Vocabulary & Word Choice").expect("vocabulary area");
    assert_eq!(vocabulary.priority, Priority::Medium);
    assert!(vocabulary.description.contains("39%"));
}

#[test]
fn any_word_repeated_more_than_five_times_adds_vocabulary_area() {
    let evaluation = report(&[]);
    let mut metrics = plain_metrics();
    assert!(find(&build(&metrics, &evaluation), "Vocabulary & Word Choice").is_none());

    metrics.vocabulary.most_frequent = Some(frequency("the", 6));
    let areas = build(&metrics, &evaluation);
    let vocabulary = find(&areas, "Vocabulary & Word Choice").expect("vocabulary area");
    assert_eq!(vocabulary.priority, Priority::Low);
    assert!(vocabulary.description.contains("'the' appears 6 times"));
}

#[test]
fn overused_content_words_are_named_in_description() {
    let mut metrics = plain_metrics();
    metrics.vocabulary.most_frequent = Some(frequency("library", 7));
    metrics.vocabulary.overused_words = vec![frequency("library", 7), frequency("books", 6)];

    let areas = build(&metrics, &report(&[]));
    let vocabulary = find(&areas, "Vocabulary & Word Choice").expect("vocabulary area");
    assert!(vocabulary
        .description
        .contains("Frequently repeated: 'library' (7x), 'books' (6x)"));
}

#[test]
fn empty_text_has_no_vocabulary_area() {
    let mut metrics = plain_metrics();
    metrics.word_count = 0;
    metrics.vocabulary.total_word_count = 0;
    metrics.vocabulary.unique_word_count = 0;
    metrics.vocabulary.diversity = 0.0;
    metrics.vocabulary.most_frequent = None;

    assert!(build(&metrics, &report(&[])).is_empty());
}
