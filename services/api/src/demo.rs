use crate::infra::{parse_dimension, submission_files, FileSystemExtractor};
use clap::Args;
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use submission_feedback::config::{AppConfig, EngineConfig};
use submission_feedback::error::AppError;
use submission_feedback::pipeline::submission::{
    BatchResult, PassthroughExtractor, SubmissionFile, SubmissionOptions, SubmissionResult,
    SubmissionService,
};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Plain-text submission files (.txt, .md)
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,
    /// Assignment type: essay, worksheet, report, creative, analysis or general
    #[arg(long)]
    pub(crate) assignment_type: Option<String>,
    /// Comma-separated dimensions to evaluate (defaults to all)
    #[arg(long, value_delimiter = ',', value_parser = parse_dimension)]
    pub(crate) criteria: Vec<String>,
    /// Maximum submissions analyzed concurrently (defaults to APP_BATCH_WORKERS)
    #[arg(long)]
    pub(crate) workers: Option<usize>,
    /// Emit the batch as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assignment type applied to the sample submissions
    #[arg(long)]
    pub(crate) assignment_type: Option<String>,
    /// Emit the batch as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        paths,
        assignment_type,
        criteria,
        workers,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = Arc::new(
        SubmissionService::new(
            Arc::new(FileSystemExtractor::unrestricted()),
            config.engine.evaluation.clone(),
        )
        .with_default_assignment_type(config.engine.default_assignment_type),
    );
    let options = SubmissionOptions {
        assignment_type,
        evaluation_criteria: (!criteria.is_empty()).then_some(criteria),
    };
    let workers = workers.unwrap_or(config.engine.batch_workers);

    let batch = service
        .process_batch_concurrent(submission_files(&paths), &options, workers)
        .await?;
    emit(&batch, json)
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        assignment_type,
        json,
    } = args;

    let engine = EngineConfig::default();
    let service = Arc::new(SubmissionService::new(
        Arc::new(PassthroughExtractor),
        engine.evaluation.clone(),
    ));
    let options = SubmissionOptions {
        assignment_type,
        evaluation_criteria: None,
    };

    if !json {
        println!("Submission feedback demo");
    }
    let batch = service
        .process_batch_concurrent(sample_submissions(), &options, engine.batch_workers)
        .await?;
    emit(&batch, json)
}

fn emit(batch: &BatchResult, as_json: bool) -> Result<(), AppError> {
    if as_json {
        let payload = json!({
            "summary": batch.summary(),
            "results": batch,
        });
        let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::other)?;
        println!("{rendered}");
    } else {
        print!("{}", render_batch(batch));
    }
    Ok(())
}

pub(crate) fn sample_submissions() -> Vec<SubmissionFile> {
    vec![
        SubmissionFile::new(
            "avery_lee-essay.txt",
            "In this essay I will argue that school gardens improve learning. Students who grow food learn science, patience and teamwork.\n\n\
For example, a 2021 study of 40 schools found that garden programs raised science scores by 12 percent. Furthermore, pupils ate more vegetables because they had grown them.\n\n\
However, critics argue that gardens take time away from core subjects. This concern is fair, but lessons can be planned so that the garden supports maths and writing.\n\n\
In conclusion, school gardens are a practical way to connect classroom knowledge with real life.",
        ),
        SubmissionFile::new(
            "sam_ortiz-story.txt",
            "The wind howled across the empty field. \"Do you hear that?\" Priya whispered.\n\n\
A silver light shimmered like moonlight on water. Suddenly the old barn door creaked open and a small fox crept out, its eyes glowing amber in the dark.\n\n\
Eventually the two friends laughed, realizing the ghost they feared was only a curious animal.",
        ),
        SubmissionFile::new("blank_upload.txt", "   "),
    ]
}

pub(crate) fn render_batch(batch: &BatchResult) -> String {
    let mut out = String::new();
    for result in batch {
        out.push_str(&render_result(result));
    }

    let summary = batch.summary();
    let _ = writeln!(
        out,
        "\n{} submissions | {} analyzed | {} failed",
        summary.total, summary.succeeded, summary.failed
    );
    if let Some(average) = summary.average_quality {
        let _ = writeln!(out, "Average quality: {:.0}%", average * 100.0);
    }
    out
}

pub(crate) fn render_result(result: &SubmissionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} ({})", result.student_name(), result.file_name());

    let Some(analysis) = result.analysis() else {
        let _ = writeln!(
            out,
            "  error: {}",
            result.error_message().unwrap_or("unknown failure")
        );
        return out;
    };

    let _ = writeln!(
        out,
        "  overall quality {:.0}% | {} words | readability {:.1} | type {}",
        analysis.overall_quality * 100.0,
        analysis.word_count,
        analysis.readability_score,
        analysis.type_analysis.assignment_type
    );
    for (dimension, score) in &analysis.dimension_scores {
        let _ = writeln!(out, "  - {:<18} {:.2}", dimension.display_name(), score.score);
    }
    if !analysis.strengths.is_empty() {
        let _ = writeln!(out, "  Strengths:");
        for strength in analysis.strengths.iter().take(3) {
            let _ = writeln!(out, "    * {} ({:.2})", strength.area, strength.score);
        }
    }
    if !analysis.feedback_suggestions.is_empty() {
        let _ = writeln!(out, "  Suggestions:");
        for suggestion in analysis.feedback_suggestions.iter().take(3) {
            let _ = writeln!(
                out,
                "    [{}] {}: {}",
                suggestion.priority.label(),
                suggestion.category,
                suggestion.suggestion
            );
        }
    }
    for focus in &analysis.assignment_focus {
        let _ = writeln!(out, "  Focus: {focus}");
    }
    out
}
