//! Feature registry: which features a tenant has enabled, and what they contain.

use crate::error::CompositionError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};
use weave_domain::config::HostingConfig;
use weave_domain::{Feature, FeatureId, TenantDescriptor, TypeRef};

/// Source of enabled features for a tenant.
pub trait FeatureRegistry {
    /// Ordered, de-duplicated ids of every feature the descriptor enables, including
    /// dependencies. Must be idempotent for a fixed descriptor and registry state.
    ///
    /// # Errors
    /// Fails when a declared or required feature cannot be resolved.
    fn enabled_features(
        &self,
        descriptor: &TenantDescriptor,
    ) -> Result<Vec<FeatureId>, CompositionError>;

    /// Materializes features in the order given.
    ///
    /// # Errors
    /// Fails when an id is unknown.
    fn load_features(&self, ids: &[FeatureId]) -> Result<Vec<Arc<Feature>>, CompositionError>;
}

impl<R: FeatureRegistry + ?Sized> FeatureRegistry for Arc<R> {
    fn enabled_features(
        &self,
        descriptor: &TenantDescriptor,
    ) -> Result<Vec<FeatureId>, CompositionError> {
        (**self).enabled_features(descriptor)
    }

    fn load_features(&self, ids: &[FeatureId]) -> Result<Vec<Arc<Feature>>, CompositionError> {
        (**self).load_features(ids)
    }
}

/// A feature as declared by its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureManifest {
    pub id: FeatureId,
    pub extension_id: String,
    /// Features that must be enabled (and ordered) before this one.
    pub dependencies: Vec<FeatureId>,
    pub types: Vec<TypeRef>,
}

impl FeatureManifest {
    pub fn new(id: impl Into<FeatureId>, extension_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extension_id: extension_id.into(),
            dependencies: Vec::new(),
            types: Vec::new(),
        }
    }

    #[must_use = "Adds a feature dependency"]
    pub fn depends_on(mut self, id: impl Into<FeatureId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    #[must_use = "Adds a candidate type"]
    pub fn with_type(mut self, type_ref: TypeRef) -> Self {
        self.types.push(type_ref);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// In-memory registry of extension features with dependency expansion and a shared cache.
///
/// Built once at startup, then shared read-only between tenant activations. The cache is the
/// only state mutated after construction.
///
/// The host feature id (from [`HostingConfig::feature`]) has no manifest: it is skipped during
/// expansion, both when declared and when required by another feature.
#[derive(Debug)]
pub struct ExtensionRegistry {
    manifests: FxHashMap<FeatureId, FeatureManifest>,
    order: Vec<FeatureId>,
    host_feature: FeatureId,
    cache: RwLock<FxHashMap<FeatureId, Arc<Feature>>>,
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new(&HostingConfig::default())
    }
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new(hosting: &HostingConfig) -> Self {
        Self {
            manifests: FxHashMap::default(),
            order: Vec::new(),
            host_feature: hosting.feature.clone(),
            cache: RwLock::default(),
        }
    }

    #[must_use]
    pub const fn host_feature(&self) -> &FeatureId {
        &self.host_feature
    }

    /// Adds a feature.
    ///
    /// # Errors
    /// Returns [`CompositionError::DuplicateFeature`] if the id is already registered or is the
    /// host feature id.
    pub fn register(&mut self, manifest: FeatureManifest) -> Result<(), CompositionError> {
        if self.is_host(&manifest.id) {
            return Err(CompositionError::DuplicateFeature {
                message: manifest.id.to_string().into(),
                context: Some(
                    format!("reserved for the host, declared by {}", manifest.extension_id).into(),
                ),
            });
        }

        if let Some(existing) = self.manifests.get(&manifest.id) {
            return Err(CompositionError::DuplicateFeature {
                message: manifest.id.to_string().into(),
                context: Some(
                    format!(
                        "declared by {} and {}",
                        existing.extension_id, manifest.extension_id
                    )
                    .into(),
                ),
            });
        }

        trace!(feature = %manifest.id, extension = %manifest.extension_id, "Feature registered");
        self.order.push(manifest.id.clone());
        self.cache.get_mut().remove(&manifest.id);
        self.manifests.insert(manifest.id.clone(), manifest);
        Ok(())
    }

    /// Registered features, in registration order.
    pub fn features(&self) -> impl Iterator<Item = &FeatureManifest> {
        self.order.iter().filter_map(|id| self.manifests.get(id))
    }

    /// Number of features materialized so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }

    fn is_host(&self, id: &FeatureId) -> bool {
        self.host_feature == *id
    }

    fn manifest(
        &self,
        id: &FeatureId,
        required_by: Option<&str>,
    ) -> Result<&FeatureManifest, CompositionError> {
        self.manifests.get(id).ok_or_else(|| CompositionError::UnknownFeature {
            message: id.to_string().into(),
            context: required_by.map(|parent| format!("required by {parent}").into()),
        })
    }

    /// Depth-first walk emitting each feature after its dependencies.
    fn visit<'a>(
        &'a self,
        id: &FeatureId,
        marks: &mut FxHashMap<&'a str, Mark>,
        path: &mut Vec<&'a str>,
        ordered: &mut Vec<FeatureId>,
    ) -> Result<(), CompositionError> {
        let manifest = self.manifest(id, path.last().copied())?;
        let key = manifest.id.as_str();

        match marks.get(key) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = path.iter().position(|p| *p == key).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(key);
                return Err(CompositionError::DependencyCycle {
                    message: cycle.join(" -> ").into(),
                    context: None,
                });
            },
            None => {},
        }

        marks.insert(key, Mark::Visiting);
        path.push(key);
        for dependency in &manifest.dependencies {
            if !self.is_host(dependency) {
                self.visit(dependency, marks, path, ordered)?;
            }
        }
        path.pop();
        marks.insert(key, Mark::Done);
        ordered.push(manifest.id.clone());
        Ok(())
    }

    fn load(&self, id: &FeatureId) -> Result<Arc<Feature>, CompositionError> {
        if let Some(feature) = self.cache.read().get(id) {
            return Ok(Arc::clone(feature));
        }

        let manifest = self.manifest(id, None)?;
        let feature = Arc::new(Feature::new(
            manifest.id.clone(),
            manifest.extension_id.clone(),
            manifest.types.clone(),
        ));

        let mut cache = self.cache.write();
        Ok(Arc::clone(cache.entry(manifest.id.clone()).or_insert(feature)))
    }
}

impl FeatureRegistry for ExtensionRegistry {
    fn enabled_features(
        &self,
        descriptor: &TenantDescriptor,
    ) -> Result<Vec<FeatureId>, CompositionError> {
        let mut marks = FxHashMap::default();
        let mut path = Vec::new();
        let mut ordered = Vec::new();

        for id in descriptor.features.iter().filter(|id| !self.is_host(id)) {
            self.visit(id, &mut marks, &mut path, &mut ordered)?;
        }

        debug!(declared = descriptor.features.len(), enabled = ordered.len(), "Features expanded");
        Ok(ordered)
    }

    fn load_features(&self, ids: &[FeatureId]) -> Result<Vec<Arc<Feature>>, CompositionError> {
        ids.iter().map(|id| self.load(id)).collect()
    }
}
