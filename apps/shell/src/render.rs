use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use serde::Serialize;
use weave::composition::ExtensionRegistry;
use weave::domain::{BlueprintKind, FeatureId, ShellBlueprint, TypeRef};

#[derive(Debug, Serialize)]
pub(crate) struct FeatureRow<'a> {
    pub(crate) id: &'a str,
    pub(crate) extension: &'a str,
    pub(crate) dependencies: Vec<&'a str>,
    pub(crate) types: Vec<&'a str>,
}

pub(crate) fn feature_rows(registry: &ExtensionRegistry) -> Vec<FeatureRow<'_>> {
    registry
        .features()
        .map(|feature| FeatureRow {
            id: feature.id.as_str(),
            extension: &feature.extension_id,
            dependencies: feature.dependencies.iter().map(FeatureId::as_str).collect(),
            types: feature.types.iter().map(TypeRef::full_name).collect(),
        })
        .collect()
}

pub(crate) fn feature_table(rows: &[FeatureRow<'_>]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Feature", "Extension", "Depends on", "Types"]);
    for row in rows {
        table.add_row(vec![
            row.id.to_owned(),
            row.extension.to_owned(),
            row.dependencies.join(", "),
            row.types.join("\n"),
        ]);
    }
    table.to_string()
}

pub(crate) fn blueprint_table(blueprint: &ShellBlueprint) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Kind", "Type", "Feature", "Parameters"]);
    for (index, entry) in blueprint.dependencies.iter().enumerate() {
        let kind = match entry.kind {
            BlueprintKind::Dependency => "dependency",
            BlueprintKind::Module => "module",
        };
        let parameters = entry
            .parameters
            .iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            (index + 1).to_string(),
            kind.to_owned(),
            entry.type_ref.full_name().to_owned(),
            entry.feature.id.to_string(),
            parameters,
        ]);
    }
    table.to_string()
}
