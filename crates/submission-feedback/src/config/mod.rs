use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::thread;

use crate::pipeline::assignment::AssignmentType;
use crate::pipeline::evaluation::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Evaluation engine settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on concurrently analyzed submissions in a batch.
    pub batch_workers: usize,
    pub default_assignment_type: AssignmentType,
    pub evaluation: EvaluationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_workers: default_batch_workers(),
            default_assignment_type: AssignmentType::General,
            evaluation: EvaluationConfig::default(),
        }
    }
}

impl EngineConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let batch_workers = match env::var("APP_BATCH_WORKERS") {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(workers) if workers > 0 => workers,
                _ => return Err(ConfigError::InvalidBatchWorkers { value }),
            },
            Err(_) => default_batch_workers(),
        };

        let default_assignment_type = env::var("APP_DEFAULT_ASSIGNMENT_TYPE")
            .map(|value| AssignmentType::parse_lenient(&value))
            .unwrap_or_default();

        let evaluation = match env::var("APP_EVALUATION_CONFIG") {
            Ok(path) if !path.trim().is_empty() => load_evaluation(PathBuf::from(path.trim()))?,
            _ => EvaluationConfig::default(),
        };

        Ok(Self {
            batch_workers,
            default_assignment_type,
            evaluation,
        })
    }
}

fn default_batch_workers() -> usize {
    thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

/// Reads an `EvaluationConfig` JSON document; omitted fields keep their defaults.
pub fn load_evaluation(path: PathBuf) -> Result<EvaluationConfig, ConfigError> {
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::EvaluationFile {
        path: path.clone(),
        source,
    })?;
    let config: EvaluationConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::EvaluationFormat {
            path: path.clone(),
            source,
        })?;
    validate_evaluation(&config).map_err(|reason| ConfigError::InvalidEvaluation { path, reason })?;
    Ok(config)
}

fn validate_evaluation(config: &EvaluationConfig) -> Result<(), String> {
    let thresholds = [
        ("strength_threshold", config.strength_threshold),
        ("improvement_threshold", config.improvement_threshold),
        ("excellent_threshold", config.excellent_threshold),
        ("good_threshold", config.good_threshold),
    ];
    for (name, value) in thresholds {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("{name} must be within [0, 1], got {value}"));
        }
    }

    let weights = &config.weights;
    let all = [
        weights.structure,
        weights.creativity,
        weights.accuracy,
        weights.presentation,
        weights.critical_thinking,
        weights.clarity,
        weights.depth,
    ];
    if all.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
        return Err("dimension weights must be finite and non-negative".to_string());
    }
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidBatchWorkers {
        value: String,
    },
    EvaluationFile {
        path: PathBuf,
        source: std::io::Error,
    },
    EvaluationFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidEvaluation {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidBatchWorkers { value } => {
                write!(f, "APP_BATCH_WORKERS must be a positive integer, got '{value}'")
            }
            ConfigError::EvaluationFile { path, .. } => {
                write!(f, "unable to read evaluation config {}", path.display())
            }
            ConfigError::EvaluationFormat { path, .. } => {
                write!(f, "evaluation config {} is not valid JSON", path.display())
            }
            ConfigError::InvalidEvaluation { path, reason } => {
                write!(f, "evaluation config {} rejected: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidBatchWorkers { .. }
            | ConfigError::InvalidEvaluation { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::EvaluationFile { source, .. } => Some(source),
            ConfigError::EvaluationFormat { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_BATCH_WORKERS");
        env::remove_var("APP_DEFAULT_ASSIGNMENT_TYPE");
        env::remove_var("APP_EVALUATION_CONFIG");
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("submission-feedback-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("temp file written");
        path
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.engine.batch_workers >= 1);
        assert_eq!(config.engine.default_assignment_type, AssignmentType::General);
        assert_eq!(config.engine.evaluation, EvaluationConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_engine_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_BATCH_WORKERS", "3");
        env::set_var("APP_DEFAULT_ASSIGNMENT_TYPE", "Essay");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.engine.batch_workers, 3);
        assert_eq!(config.engine.default_assignment_type, AssignmentType::Essay);
        reset_env();
    }

    #[test]
    fn rejects_zero_batch_workers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_BATCH_WORKERS", "0");
        let error = AppConfig::load().expect_err("zero workers rejected");
        assert!(matches!(error, ConfigError::InvalidBatchWorkers { .. }));
        reset_env();
    }

    #[test]
    fn evaluation_file_overrides_subset_of_fields() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = write_temp(
            "partial.json",
            r#"{"strength_threshold": 0.75, "weights": {"depth": 0.3}}"#,
        );
        env::set_var("APP_EVALUATION_CONFIG", &path);
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.engine.evaluation.strength_threshold, 0.75);
        assert_eq!(config.engine.evaluation.weights.depth, 0.3);
        assert_eq!(config.engine.evaluation.weights.structure, 0.20);
        assert_eq!(config.engine.evaluation.length_penalty_words, 150);
        reset_env();
        let _ = fs::remove_file(path);
    }

    #[test]
    fn evaluation_file_with_out_of_range_threshold_is_rejected() {
        let path = write_temp("invalid.json", r#"{"good_threshold": 1.5}"#);
        let error = load_evaluation(path.clone()).expect_err("threshold rejected");
        assert!(matches!(error, ConfigError::InvalidEvaluation { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_evaluation_file_reports_path() {
        let path = env::temp_dir().join("submission-feedback-does-not-exist.json");
        let error = load_evaluation(path).expect_err("missing file");
        assert!(error.to_string().contains("does-not-exist"));
    }
}
