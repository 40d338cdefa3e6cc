use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use weave_domain::config::{LogFormat, LoggingConfig};
use weave_logger::Logger;

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        console: false,
        format: LogFormat::Json,
        directory: Some(log_dir.clone()),
        file_prefix: String::new(),
        ..LoggingConfig::default()
    };
    let logger = Logger::init("integration-file-logging", &config)?;
    assert!(logger.guard().is_some());

    tracing::info!(tenant = "Default", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let name = log_file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(name.starts_with("integration-file-logging"), "empty prefix falls back to the app name");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("hello from integration test"));
    assert!(contents.contains("\"tenant\":\"Default\""));
    Ok(())
}
