//! Multi-dimensional feedback engine for free-text student submissions.
//!
//! Raw text flows through [`pipeline::metrics`], then [`pipeline::assignment`] and
//! [`pipeline::evaluation`], and is merged by [`pipeline::feedback`]. The
//! [`pipeline::submission`] service drives single files and batches and exposes an
//! axum router for the HTTP surface.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;

pub use pipeline::{
    submission_router, AssignmentType, BatchResult, Dimension, SubmissionError, SubmissionFile,
    SubmissionOptions, SubmissionResult, SubmissionService,
};
