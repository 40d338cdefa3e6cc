use std::fs;
use tempfile::TempDir;
use weave::prelude::*;

const HOST: &str = r#"
[[types]]
name = "Weave.Core.Clock"
capabilities = ["dependency"]

[[types]]
name = "Acme.Blog.Module"
capabilities = ["module"]

[[extensions]]
id = "Acme"

[[extensions.features]]
id = "Blog"
types = ["Acme.Blog.Module"]

[[libraries]]
name = "Weave.Core"
types = ["Weave.Core.Clock"]
"#;

#[test]
fn host_composes_tenants_from_a_manifest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.toml");
    fs::write(&path, HOST).unwrap();

    let host = Host::from_manifest(&WeaveConfig::default(), &path).unwrap();
    assert_eq!(host.types().len(), 2);
    assert_eq!(host.catalog().len(), 1);

    let descriptor = TenantDescriptor::default().with_feature("Weave.Hosting").with_feature("Blog");
    let blueprint = host.compose(&TenantSettings::new("acme"), &descriptor).unwrap();

    let names: Vec<&str> = blueprint.dependencies.iter().map(|e| e.type_ref.full_name()).collect();
    assert_eq!(names, ["Weave.Core.Clock", "Acme.Blog.Module"]);
    assert_eq!(host.registry().cached(), 1);
}

#[test]
fn custom_host_feature_gates_builtins() {
    let mut config = WeaveConfig::default();
    config.hosting.feature = FeatureId::from("Acme.Hosting");

    let manifest = HostManifest {
        types: vec![TypeDescriptor::new("Weave.Core.Clock").dependency()],
        libraries: vec![weave::composition::LibraryManifest {
            name: "Weave.Core".to_owned(),
            types: vec!["Weave.Core.Clock".to_owned()],
        }],
        ..HostManifest::default()
    };
    let host = Host::from_parts(&config, &manifest).unwrap();

    let default_feature = TenantDescriptor::default().with_feature("Weave.Hosting");
    assert!(host.compose(&TenantSettings::new("t"), &default_feature).is_err());

    let custom = TenantDescriptor::default().with_feature("Acme.Hosting");
    let blueprint = host.compose(&TenantSettings::new("t"), &custom).unwrap();
    assert!(blueprint.contains("Weave.Core.Clock"));
}
