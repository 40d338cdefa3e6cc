//! Declarative description of a host: its types, extension features and host libraries.
//!
//! ```toml
//! [[types]]
//! name = "NS.D1"
//! capabilities = ["dependency"]
//! replaces = ["NS.Old"]
//!
//! [[extensions]]
//! id = "Acme"
//! [[extensions.features]]
//! id = "B"
//! dependencies = ["A"]
//! types = ["NS.D1"]
//!
//! [[libraries]]
//! name = "Weave.Core"
//! types = ["Weave.Core.Clock"]
//! ```

use crate::capability::TypeRegistry;
use crate::catalog::{StaticCatalog, StaticLibrary};
use crate::engine::CompositionStrategy;
use crate::error::{CompositionError, CompositionErrorExt};
use crate::registry::{ExtensionRegistry, FeatureManifest};
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use weave_domain::config::HostingConfig;
use weave_domain::{FeatureId, TypeDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostManifest {
    pub types: Vec<TypeDescriptor>,
    pub extensions: Vec<ExtensionManifest>,
    pub libraries: Vec<LibraryManifest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtensionManifest {
    pub id: String,
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureEntry {
    pub id: FeatureId,
    #[serde(default)]
    pub dependencies: Vec<FeatureId>,
    /// Full names of registered types.
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryManifest {
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Collaborators built from a [`HostManifest`].
#[derive(Debug)]
pub struct HostComponents {
    pub types: TypeRegistry,
    pub registry: ExtensionRegistry,
    pub catalog: StaticCatalog,
}

impl HostComponents {
    #[must_use]
    pub fn into_strategy(
        self,
        hosting: HostingConfig,
    ) -> CompositionStrategy<ExtensionRegistry, StaticCatalog> {
        CompositionStrategy::new(self.registry, self.catalog, hosting)
    }
}

impl HostManifest {
    /// Reads a manifest from a TOML, JSON or YAML file.
    ///
    /// # Errors
    /// Returns [`CompositionError::Manifest`] when the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompositionError> {
        let path = path.as_ref();
        weave_kernel::config::load_document::<Self>(path)
            .context(format!("host manifest {}", path.display()))
    }

    /// Registers every type, then the extension features and host libraries referring to them.
    ///
    /// # Errors
    /// * [`CompositionError::UnknownType`] when a feature or library names an unregistered type.
    /// * [`CompositionError::DuplicateFeature`] when two features share an id, or a feature
    ///   claims the host feature id.
    pub fn build(&self, hosting: &HostingConfig) -> Result<HostComponents, CompositionError> {
        let mut types = TypeRegistry::new();
        for descriptor in &self.types {
            types.register(descriptor.clone());
        }

        let mut registry = ExtensionRegistry::new(hosting);
        for extension in &self.extensions {
            for entry in &extension.features {
                let manifest = FeatureManifest {
                    id: entry.id.clone(),
                    extension_id: extension.id.clone(),
                    dependencies: entry.dependencies.clone(),
                    types: types
                        .resolve_all(&entry.types)
                        .context(format!("feature {}", entry.id))?,
                };
                registry.register(manifest)?;
            }
        }

        let mut catalog = StaticCatalog::new();
        for library in &self.libraries {
            let exports =
                types.resolve_all(&library.types).context(format!("library {}", library.name))?;
            catalog = catalog.with_library(StaticLibrary::new(library.name.clone(), exports));
        }

        info!(
            types = types.len(),
            features = registry.features().count(),
            libraries = catalog.len(),
            "Host manifest built"
        );
        Ok(HostComponents { types, registry, catalog })
    }
}
