use super::common::*;
use serde_json::json;

use crate::pipeline::assignment::AssignmentType;
use crate::pipeline::evaluation::{Dimension, EvaluationError};
use crate::pipeline::submission::{
    PassthroughExtractor, SubmissionError, SubmissionOptions, SubmissionService, SubmissionStatus,
};

#[test]
fn batch_isolates_empty_submission() {
    let service = passthrough_service();
    let files = vec![
        file("alice.txt", ESSAY),
        file("bob.txt", "   \n  "),
        file("carol.txt", "A short answer about libraries. It is still text."),
    ];

    let batch = service
        .process_batch(&files, &SubmissionOptions::default())
        .expect("batch processes");

    assert_eq!(batch.len(), 3);
    let names: Vec<&str> = batch.iter().map(|result| result.file_name()).collect();
    assert_eq!(names, vec!["alice.txt", "bob.txt", "carol.txt"]);

    let results = batch.results();
    assert_eq!(results[0].status(), SubmissionStatus::Success);
    assert_eq!(results[2].status(), SubmissionStatus::Success);
    assert_eq!(results[1].status(), SubmissionStatus::Error);
    assert!(results[1].analysis().is_none());
    let message = results[1].error_message().expect("error message");
    assert!(message.to_lowercase().contains("empty"));

    for result in &batch {
        assert_ne!(result.analysis().is_some(), result.error_message().is_some());
    }

    let summary = batch.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert!(summary.average_quality.is_some());
}

#[test]
fn empty_batch_is_not_an_error() {
    let service = passthrough_service();
    let batch = service
        .process_batch(&[], &SubmissionOptions::default())
        .expect("empty batch");
    assert!(batch.is_empty());
}

#[test]
fn extraction_failures_are_recorded_per_file() {
    let service = service_with(SelectiveExtractor);
    let files = vec![file("corrupt.docx", "ignored"), file("ok.txt", ESSAY)];

    let batch = service
        .process_batch(&files, &SubmissionOptions::default())
        .expect("batch processes");

    let failed = &batch.results()[0];
    assert_eq!(failed.status(), SubmissionStatus::Error);
    assert!(failed
        .error_message()
        .is_some_and(|message| message.contains("unsupported file encoding")));
    assert!(batch.results()[1].is_success());

    let error = service
        .process_one(&files[0], &SubmissionOptions::default())
        .expect_err("extraction fails");
    assert!(matches!(error, SubmissionError::ExtractionFailed { .. }));
}

#[test]
fn process_one_rejects_blank_text() {
    let service = passthrough_service();
    let error = service
        .process_one(&file("blank.txt", "\t\n"), &SubmissionOptions::default())
        .expect_err("blank rejected");
    assert_eq!(error, SubmissionError::EmptyContent);
}

#[test]
fn unknown_criterion_fails_the_call() {
    let service = passthrough_service();
    let options = SubmissionOptions {
        assignment_type: None,
        evaluation_criteria: Some(vec!["structure".to_string(), "tone".to_string()]),
    };

    let error = service
        .process_batch(&[file("a.txt", ESSAY)], &options)
        .expect_err("unknown dimension propagates");
    assert_eq!(
        error,
        SubmissionError::UnknownDimension(EvaluationError::UnknownDimension {
            name: "tone".to_string()
        })
    );
}

#[test]
fn criteria_limit_computed_dimensions() {
    let service = passthrough_service();
    let options = SubmissionOptions {
        assignment_type: Some("essay".to_string()),
        evaluation_criteria: Some(vec!["clarity".to_string(), "structure".to_string()]),
    };

    let analysis = service
        .process_one(&file("a.txt", ESSAY), &options)
        .expect("analysis");

    let computed: Vec<Dimension> = analysis.dimension_scores.keys().copied().collect();
    assert_eq!(computed, vec![Dimension::Structure, Dimension::Clarity]);
    assert_eq!(analysis.type_analysis.assignment_type, AssignmentType::Essay);
}

#[test]
fn analysis_exposes_convenience_fields() {
    let service = passthrough_service();
    let analysis = service
        .process_one(&file("a.txt", ESSAY), &SubmissionOptions::default())
        .expect("analysis");

    assert_eq!(analysis.overall_quality, analysis.evaluation.overall_score);
    assert_eq!(analysis.word_count, analysis.text_metrics.word_count);
    assert_eq!(
        analysis.readability_score,
        analysis.text_metrics.readability_score
    );
    assert_eq!(analysis.dimension_scores.len(), Dimension::ALL.len());
    assert!((0.0..=1.0).contains(&analysis.overall_quality));

    let value = serde_json::to_value(&analysis).expect("serialize");
    for key in [
        "overallQuality",
        "dimensionScores",
        "strengths",
        "improvementAreas",
        "feedbackSuggestions",
        "wordCount",
        "readabilityScore",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn repeated_analysis_is_identical() {
    let service = passthrough_service();
    let options = SubmissionOptions::default();
    let first = service
        .process_one(&file("a.txt", ESSAY), &options)
        .expect("first");
    let second = service
        .process_one(&file("a.txt", ESSAY), &options)
        .expect("second");
    assert_eq!(first, second);
}

#[test]
fn default_assignment_type_applies_without_options() {
    let service = SubmissionService::<PassthroughExtractor>::default()
        .with_default_assignment_type(AssignmentType::Report);
    let analysis = service
        .process_one(&file("a.txt", ESSAY), &SubmissionOptions::default())
        .expect("analysis");
    assert_eq!(analysis.type_analysis.assignment_type, AssignmentType::Report);

    let options = SubmissionOptions {
        assignment_type: Some("story".to_string()),
        evaluation_criteria: None,
    };
    let analysis = service
        .process_one(&file("a.txt", ESSAY), &options)
        .expect("analysis");
    assert_eq!(analysis.type_analysis.assignment_type, AssignmentType::Creative);
}

#[test]
fn value_batch_requires_an_array() {
    let service = passthrough_service();
    let error = service
        .process_batch_value(&json!({"name": "a.txt"}), &SubmissionOptions::default())
        .expect_err("object rejected");
    assert_eq!(
        error,
        SubmissionError::InvalidBatchInput {
            found: "object".to_string()
        }
    );
}

#[test]
fn value_batch_records_malformed_items() {
    let service = passthrough_service();
    let files = json!([
        {"name": "jane_doe.txt", "content": ESSAY},
        42,
        {"name": "no_content.txt"}
    ]);

    let batch = service
        .process_batch_value(&files, &SubmissionOptions::default())
        .expect("batch processes");

    let results = batch.results();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert_eq!(results[0].student_name(), "Jane Doe");
    assert_eq!(results[1].file_name(), "submission-2");
    assert!(results[1]
        .error_message()
        .is_some_and(|message| message.starts_with("Invalid submission record")));
    assert!(results[2]
        .error_message()
        .is_some_and(|message| message.to_lowercase().contains("empty")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_batch_keeps_order_and_isolates_panics() {
    let service = service_with(PanickingExtractor);
    let files = vec![
        file("first.txt", ESSAY),
        file("panic.txt", ESSAY),
        file("third.txt", ""),
        file("fourth.txt", "Libraries matter. They help people learn."),
    ];

    let batch = service
        .process_batch_concurrent(files, &SubmissionOptions::default(), 2)
        .await
        .expect("batch processes");

    let names: Vec<&str> = batch.iter().map(|result| result.file_name()).collect();
    assert_eq!(
        names,
        vec!["first.txt", "panic.txt", "third.txt", "fourth.txt"]
    );
    let statuses: Vec<SubmissionStatus> = batch.iter().map(|result| result.status()).collect();
    assert_eq!(
        statuses,
        vec![
            SubmissionStatus::Success,
            SubmissionStatus::Error,
            SubmissionStatus::Error,
            SubmissionStatus::Success,
        ]
    );
    assert!(batch.results()[1]
        .error_message()
        .is_some_and(|message| message.contains("worker failed")));
}

#[tokio::test]
async fn concurrent_batch_matches_sequential_analysis() {
    let service = passthrough_service();
    let files = vec![file("a.txt", ESSAY), file("b.txt", "Short text here.")];
    let options = SubmissionOptions::default();

    let sequential = service.process_batch(&files, &options).expect("sequential");
    let concurrent = service
        .process_batch_concurrent(files, &options, 4)
        .await
        .expect("concurrent");

    for (left, right) in sequential.iter().zip(concurrent.iter()) {
        assert_eq!(left.analysis(), right.analysis());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_value_batch_isolates_records_and_panics() {
    let service = service_with(PanickingExtractor);
    let files = json!([
        {"name": "panic.txt", "content": ESSAY},
        {"name": 7},
        {"name": "ok.txt", "content": ESSAY}
    ]);

    let batch = service
        .process_batch_value_concurrent(&files, &SubmissionOptions::default())
        .await
        .expect("batch processes");

    let statuses: Vec<SubmissionStatus> = batch.iter().map(|result| result.status()).collect();
    assert_eq!(
        statuses,
        vec![
            SubmissionStatus::Error,
            SubmissionStatus::Error,
            SubmissionStatus::Success,
        ]
    );
    assert_eq!(batch.results()[1].file_name(), "submission-2");
    assert!(batch.results()[1]
        .error_message()
        .is_some_and(|message| message.starts_with("Invalid submission record")));
}

#[tokio::test]
async fn concurrent_value_batch_rejects_non_arrays() {
    let error = passthrough_service()
        .process_batch_value_concurrent(&json!({"name": "a.txt"}), &SubmissionOptions::default())
        .await
        .expect_err("object rejected");
    assert_eq!(
        error,
        SubmissionError::InvalidBatchInput {
            found: "object".to_string()
        }
    );
}

#[test]
fn batch_workers_never_drop_below_one() {
    let service = SubmissionService::<PassthroughExtractor>::default().with_batch_workers(0);
    assert_eq!(service.batch_workers(), 1);
    let service = service.with_batch_workers(6);
    assert_eq!(service.batch_workers(), 6);
}
