//! Loading a logger from a TOML file.

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use datadog_logger::config::{load_config, ConfigError, ConfigValidationError};
use datadog_logger::sink::SharedWriter;
use datadog_logger::tags::ValidationError;
use datadog_logger::{Level, LoggerBuilder};

mod common;

use common::{start_mock_intake, Capture};

/// A config file removed when dropped.
struct TempConfig(PathBuf);

impl TempConfig {
    fn new(content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("datadog-logger-{}.toml", Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        Self(path)
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn config_text(intake_url: &str) -> String {
    format!(
        r#"
logger_name = "qj6-service"

[remote]
level = "error"
api_key = "file-key"
intake_url = "{intake_url}"
timeout_secs = 5

[console]
level = "info"
target = "stdout"

[tags]
sigla = "QJ6"
datacenter = "ctsp"
condominio = "devops"
account_id = "42"
environment = "hom"
version = "3.1.0"
service = "QJ6-BATCH"
produto = "Pagamentos"
jornada = "Liquidacao"
correlationId = "run-1"
repo_url = "https://git.example.com/qj6/batch"
ddsource = "batch"
"#
    )
}

#[test]
fn test_load_and_build_from_file() {
    let intake = start_mock_intake(202);
    let file = TempConfig::new(&config_text(intake.url().as_str()));

    let config = load_config(&file.0).unwrap();
    assert_eq!(config.logger_name, "qj6-service");
    assert_eq!(config.remote.level, Level::Error);
    assert_eq!(config.console.level, Level::Info);

    let (tags, options) = config.into_parts();
    let console = Capture::default();
    let logger = LoggerBuilder::new(tags)
        .options(options)
        .console_writer(SharedWriter::new(console.clone()))
        .build()
        .unwrap();
    assert_eq!(logger.name(), "qj6-service");

    logger.emit(Level::Debug, "job", "filtered everywhere").unwrap();
    logger.emit(Level::Warning, "job", "console only").unwrap();
    logger.emit(Level::Error, "job", "both").unwrap();

    assert_eq!(console.lines().len(), 2);
    let requests = intake.requests();
    assert_eq!(requests.len(), 1);
    let item = &requests[0].json()[0];
    assert_eq!(item["ddsource"], "batch");
    assert_eq!(item["service"], "QJ6-BATCH");
    assert!(item["message"].as_str().unwrap().contains(r#""message":"both""#));
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let file = TempConfig::new(
        r#"
[remote]
timeout_secs = 0

[tags]
sigla = "QJ6"
cloud_provider = "aws"
condominio = "paas"
account_id = "1"
environment = "prod"
version = "1"
service = "s"
produto = "p"
jornada = "j"
correlationId = "c"
"#,
    );

    let err = load_config(&file.0).unwrap_err();
    match err {
        ConfigError::Validation(errors) => assert_eq!(
            errors,
            vec![
                ConfigValidationError::ZeroTimeout,
                ConfigValidationError::Tag(ValidationError::MissingRepoUrl),
            ]
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_enum_value_is_a_parse_error() {
    let file = TempConfig::new("[tags]\nenvironment = \"staging\"\n");
    assert!(matches!(load_config(&file.0), Err(ConfigError::Parse(_))));
}
