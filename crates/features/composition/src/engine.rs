//! Composition engine: from tenant descriptor to shell blueprint.

use crate::builtin::builtin_features;
use crate::catalog::LibraryCatalog;
use crate::error::CompositionError;
use crate::registry::FeatureRegistry;
use fxhash::FxHashSet;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, instrument, trace};
use weave_domain::config::HostingConfig;
use weave_domain::{
    BlueprintKind, DependencyBlueprint, Feature, ShellBlueprint, TenantDescriptor,
    TenantSettings, TypeRef,
};

/// Computes tenant blueprints from a feature registry and the host's library catalog.
///
/// Holds no mutable state of its own; one instance serves every tenant activation and is
/// `Send + Sync` whenever its collaborators are.
#[derive(Debug, Clone)]
pub struct CompositionStrategy<R, C> {
    registry: R,
    catalog: C,
    hosting: HostingConfig,
}

impl<R, C> CompositionStrategy<R, C>
where
    R: FeatureRegistry,
    C: LibraryCatalog,
{
    pub const fn new(registry: R, catalog: C, hosting: HostingConfig) -> Self {
        Self { registry, catalog, hosting }
    }

    pub const fn registry(&self) -> &R {
        &self.registry
    }

    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    pub const fn hosting(&self) -> &HostingConfig {
        &self.hosting
    }

    /// Builds the blueprint for one tenant.
    ///
    /// # Errors
    /// Registry and library failures propagate unchanged; no partial blueprint is returned.
    #[instrument(
        name = "compose",
        skip_all,
        fields(tenant = %settings.name, serial = descriptor.serial_number)
    )]
    pub fn compose(
        &self,
        settings: &TenantSettings,
        descriptor: &TenantDescriptor,
    ) -> Result<ShellBlueprint, CompositionError> {
        debug!("Composing blueprint");

        let features = self.expand(descriptor)?;
        let blueprint = assemble(settings, descriptor, &features);

        debug!(
            features = features.len(),
            entries = blueprint.dependencies.len(),
            "Done composing blueprint"
        );
        Ok(blueprint)
    }

    /// Enabled features in activation order, with builtin features last.
    ///
    /// The host feature never reaches the registry: it is served by the library catalog.
    fn expand(&self, descriptor: &TenantDescriptor) -> Result<Vec<Arc<Feature>>, CompositionError> {
        let host = &self.hosting.feature;
        let host_enabled = descriptor.declares(host.as_str());

        let extensions = if host_enabled {
            let mut extensions = descriptor.clone();
            extensions.features.retain(|id| id != host);
            Cow::Owned(extensions)
        } else {
            Cow::Borrowed(descriptor)
        };

        let ids = self.registry.enabled_features(&extensions)?;
        let mut features = self.registry.load_features(&ids)?;

        if host_enabled {
            features.extend(builtin_features(&self.catalog, &self.hosting)?);
        }

        Ok(features)
    }
}

/// Classifies the candidate types of `features` into a blueprint.
///
/// Never fails: unmatched parameters and dangling suppression records are simply ignored.
#[must_use]
pub fn assemble(
    settings: &TenantSettings,
    descriptor: &TenantDescriptor,
    features: &[Arc<Feature>],
) -> ShellBlueprint {
    let suppressed = suppressed_types(features);

    let mut dependencies = classify(features, &suppressed, TypeRef::is_dependency)
        .map(|(feature, type_ref)| DependencyBlueprint {
            parameters: descriptor.parameters_for(type_ref.full_name()).cloned().collect(),
            type_ref: type_ref.clone(),
            feature: Arc::clone(feature),
            kind: BlueprintKind::Dependency,
        })
        .collect::<Vec<_>>();

    dependencies.extend(classify(features, &suppressed, TypeRef::is_module).map(
        |(feature, type_ref)| DependencyBlueprint {
            type_ref: type_ref.clone(),
            feature: Arc::clone(feature),
            kind: BlueprintKind::Module,
            parameters: Vec::new(),
        },
    ));

    ShellBlueprint { settings: settings.clone(), descriptor: descriptor.clone(), dependencies }
}

/// Full names named by any `replaces` record across `features`.
#[must_use]
pub fn suppressed_types(features: &[Arc<Feature>]) -> FxHashSet<&str> {
    let mut suppressed = FxHashSet::default();
    for type_ref in features.iter().flat_map(|feature| &feature.types) {
        for name in type_ref.replaced_types() {
            if suppressed.insert(name) {
                trace!(suppressor = %type_ref, suppressed = name, "Type suppressed");
            }
        }
    }
    suppressed
}

fn classify<'a>(
    features: &'a [Arc<Feature>],
    suppressed: &'a FxHashSet<&str>,
    capable: fn(&TypeRef) -> bool,
) -> impl Iterator<Item = (&'a Arc<Feature>, &'a TypeRef)> {
    features.iter().flat_map(move |feature| {
        feature
            .types
            .iter()
            .filter(move |ty| capable(ty) && !suppressed.contains(ty.full_name()))
            .map(move |ty| (feature, ty))
    })
}
