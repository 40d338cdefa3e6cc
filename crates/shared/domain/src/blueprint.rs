use crate::feature::Feature;
use crate::tenant::{ComponentParameter, TenantDescriptor, TenantSettings};
use crate::types::TypeRef;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Role a blueprint entry was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintKind {
    Dependency,
    Module,
}

/// One thing to instantiate: a type, the feature it came from and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyBlueprint {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(serialize_with = "serialize_feature_id")]
    pub feature: Arc<Feature>,
    pub kind: BlueprintKind,
    pub parameters: Vec<ComponentParameter>,
}

/// Everything the container builder needs to set up one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellBlueprint {
    pub settings: TenantSettings,
    pub descriptor: TenantDescriptor,
    /// Dependency entries first, then module entries.
    pub dependencies: Vec<DependencyBlueprint>,
}

impl ShellBlueprint {
    pub fn entries_of(&self, kind: BlueprintKind) -> impl Iterator<Item = &DependencyBlueprint> {
        self.dependencies.iter().filter(move |entry| entry.kind == kind)
    }

    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.dependencies.iter().any(|entry| entry.type_ref.full_name() == full_name)
    }
}

fn serialize_feature_id<S>(feature: &Arc<Feature>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    feature.id.serialize(serializer)
}
