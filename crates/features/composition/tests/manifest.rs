use std::fs;
use tempfile::TempDir;
use weave_composition::{CompositionError, HostManifest};
use weave_domain::config::HostingConfig;
use weave_domain::{BlueprintKind, TenantDescriptor, TenantSettings};

const HOST: &str = r#"
[[types]]
name = "NS.D1"
capabilities = ["dependency"]
replaces = ["NS.Old"]

[[types]]
name = "NS.Old"
capabilities = ["dependency"]

[[types]]
name = "NS.M1"
capabilities = ["module"]

[[types]]
name = "Weave.Core.Clock"
capabilities = ["dependency"]

[[types]]
name = "Weave.Hosting.DefaultHost"
capabilities = ["module"]

[[extensions]]
id = "Acme"

[[extensions.features]]
id = "A"
types = ["NS.M1", "NS.Old"]

[[extensions.features]]
id = "B"
dependencies = ["A"]
types = ["NS.D1"]

[[libraries]]
name = "Weave.Core"
types = ["Weave.Core.Clock", "Weave.Hosting.DefaultHost"]
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn builds_a_working_host_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "host.toml", HOST);

    let manifest = HostManifest::load(&path).unwrap();
    assert_eq!(manifest.types.len(), 5);
    assert_eq!(manifest.extensions[0].features[1].dependencies[0].as_str(), "A");

    let hosting = HostingConfig::default();
    let strategy = manifest.build(&hosting).unwrap().into_strategy(hosting);
    let descriptor = TenantDescriptor::default().with_feature("B").with_feature("Weave.Hosting");

    let blueprint = strategy.compose(&TenantSettings::new("acme"), &descriptor).unwrap();
    let entries: Vec<(&str, BlueprintKind)> = blueprint
        .dependencies
        .iter()
        .map(|entry| (entry.type_ref.full_name(), entry.kind))
        .collect();

    assert_eq!(
        entries,
        [
            ("NS.D1", BlueprintKind::Dependency),
            ("Weave.Core.Clock", BlueprintKind::Dependency),
            ("NS.M1", BlueprintKind::Module),
        ]
    );
}

#[test]
fn loads_json_manifests() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "host.json",
        r#"{
            "types": [{ "name": "NS.X", "capabilities": ["module", "dependency"] }],
            "extensions": [{ "id": "Acme", "features": [{ "id": "X", "types": ["NS.X"] }] }]
        }"#,
    );

    let manifest = HostManifest::load(&path).unwrap();
    let host = manifest.build(&HostingConfig::default()).unwrap();

    assert_eq!(host.registry.features().count(), 1);
    assert!(host.types.resolve("NS.X").is_some_and(|ty| ty.is_module() && ty.is_dependency()));
}

#[test]
fn missing_manifest_is_reported() {
    let dir = TempDir::new().unwrap();

    let err = HostManifest::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, CompositionError::Manifest { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn unknown_capability_tags_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "host.toml", "[[types]]\nname = \"NS.X\"\ncapabilities = [\"plugin\"]\n");

    let err = HostManifest::load(&path).unwrap_err();

    assert!(matches!(err, CompositionError::Manifest { .. }));
}
