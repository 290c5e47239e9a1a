use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use submission_feedback::pipeline::evaluation::Dimension;
use submission_feedback::pipeline::submission::{ExtractionError, SubmissionFile, TextExtractor};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Extensions read as UTF-8 text; everything else needs an upstream converter.
const TEXT_EXTENSIONS: [&str; 4] = ["txt", "md", "markdown", "text"];

#[derive(Debug, Clone)]
enum PathAccess {
    /// Names are paths as given. Only for local CLI use.
    Any,
    /// Names are relative paths that must stay inside the root after resolution.
    Within(PathBuf),
    /// Only inline content is accepted.
    Denied,
}

/// Reads plain-text submissions from disk, treating `SubmissionFile::name` as a path.
///
/// Inline content wins when present so API callers can mix uploaded and on-disk files.
#[derive(Debug, Clone)]
pub(crate) struct FileSystemExtractor {
    access: PathAccess,
}

impl FileSystemExtractor {
    /// Reads any path the process can open.
    pub(crate) fn unrestricted() -> Self {
        Self {
            access: PathAccess::Any,
        }
    }

    /// Reads only files that resolve inside `root`, following symlinks.
    pub(crate) fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            access: PathAccess::Within(root.into()),
        }
    }

    /// Refuses every path-backed read.
    pub(crate) fn inline_only() -> Self {
        Self {
            access: PathAccess::Denied,
        }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, ExtractionError> {
        match &self.access {
            PathAccess::Any => Ok(PathBuf::from(name)),
            PathAccess::Denied => Err(ExtractionError::new(format!(
                "{name} has no inline content and file reads are disabled"
            ))),
            PathAccess::Within(root) => {
                let relative = Path::new(name);
                let plain = relative
                    .components()
                    .all(|part| matches!(part, Component::Normal(_) | Component::CurDir));
                if !plain {
                    return Err(unavailable(name));
                }

                let root = fs::canonicalize(root).map_err(|_| unavailable(name))?;
                let path = fs::canonicalize(root.join(relative)).map_err(|_| unavailable(name))?;
                if !path.starts_with(&root) {
                    return Err(unavailable(name));
                }
                Ok(path)
            }
        }
    }
}

impl TextExtractor for FileSystemExtractor {
    fn extract_text(&self, file: &SubmissionFile) -> Result<String, ExtractionError> {
        if !file.content.is_empty() {
            return Ok(file.content.clone());
        }

        if !is_text_file(Path::new(&file.name)) {
            return Err(ExtractionError::new(format!(
                "unsupported file type for {}",
                file.name
            )));
        }

        let path = self.resolve(&file.name)?;
        let bytes = fs::read(&path)
            .map_err(|err| ExtractionError::new(format!("{}: {err}", file.name)))?;
        String::from_utf8(bytes)
            .map_err(|_| ExtractionError::new(format!("{} is not valid UTF-8", file.name)))
    }
}

fn unavailable(name: &str) -> ExtractionError {
    ExtractionError::new(format!("submission file {name} is not available"))
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Builds path-backed submission records; content is read later by the extractor.
pub(crate) fn submission_files(paths: &[PathBuf]) -> Vec<SubmissionFile> {
    paths
        .iter()
        .map(|path| SubmissionFile::new(path.display().to_string(), String::new()))
        .collect()
}

/// Validates a criteria name from the command line.
pub(crate) fn parse_dimension(raw: &str) -> Result<String, String> {
    let name = raw.trim().to_ascii_lowercase();
    name.parse::<Dimension>()
        .map(|dimension| dimension.name().to_string())
        .map_err(|err| {
            let known: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
            format!("{err} (expected one of: {})", known.join(", "))
        })
}
