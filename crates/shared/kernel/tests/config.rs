use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use weave_kernel::config::{ConfigError, load_config, load_document, load_host_config};
use weave_kernel::domain::config::{LogFormat, WeaveConfig};
use weave_kernel::domain::constants::HOST_FEATURE;

#[test]
#[serial]
fn loads_toml_file_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("weave.toml");
    fs::write(&path, "[hosting]\nlibrary_prefix = \"Acme\"\n\n[logging]\nformat = \"json\"\n")?;

    let cfg: WeaveConfig = load_config(Some(&path))?;
    assert_eq!(cfg.hosting.library_prefix, "Acme");
    assert_eq!(cfg.hosting.feature.as_str(), HOST_FEATURE);
    assert_eq!(cfg.logging.format, LogFormat::Json);
    Ok(())
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<WeaveConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("missing config must fail");

    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
#[serial]
fn host_config_defaults_without_file() -> Result<(), ConfigError> {
    let cfg = load_host_config(None)?;
    assert_eq!(cfg.hosting.feature.as_str(), HOST_FEATURE);
    Ok(())
}

#[test]
#[serial]
fn loads_json_documents() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(serde::Deserialize)]
    struct Doc {
        name: String,
        features: Vec<String>,
    }

    let dir = tempdir()?;
    let path = dir.path().join("tenant.json");
    fs::write(&path, r#"{ "name": "Default", "features": ["A", "B"] }"#)?;

    let doc: Doc = load_document(&path)?;
    assert_eq!(doc.name, "Default");
    assert_eq!(doc.features, ["A", "B"]);
    Ok(())
}

#[test]
#[serial]
fn malformed_document_reports_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = [").expect("write fixture");

    let err = load_document::<WeaveConfig>(&path).expect_err("malformed document must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("broken.toml"));
}
