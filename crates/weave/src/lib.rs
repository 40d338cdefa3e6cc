//! Facade crate for Weave.
//! Re-exports the domain model, config loading, logging and the composition engine, and
//! wires them into a [`Host`].
//! Keep this crate thin: it should compose other crates, not implement composition logic.
//!
//! ## Usage
//! - Load a [`domain::config::WeaveConfig`] with [`kernel::config::load_host_config`].
//! - Call [`Host::from_manifest`] once at startup, then [`Host::compose`] per tenant activation.

pub use weave_composition as composition;
pub use weave_domain as domain;
pub use weave_kernel as kernel;
pub use weave_logger as logger;

use std::path::Path;
use tracing::info;
use weave_composition::{
    CompositionError, CompositionStrategy, ExtensionRegistry, HostManifest, StaticCatalog,
    TypeRegistry,
};
use weave_domain::config::WeaveConfig;
use weave_domain::{ShellBlueprint, TenantDescriptor, TenantSettings};

pub mod prelude {
    pub use weave_composition::{
        CompositionError, CompositionErrorExt, CompositionStrategy, ExtensionRegistry,
        FeatureManifest, FeatureRegistry, HostManifest, Library, LibraryCatalog, StaticCatalog,
        StaticLibrary, TypeRegistry,
    };
    pub use weave_domain::config::{HostingConfig, WeaveConfig};
    pub use weave_domain::{
        BlueprintKind, Capabilities, Component, ComponentParameter, DependencyBlueprint, Feature,
        FeatureId, ShellBlueprint, TenantDescriptor, TenantSettings, TypeDescriptor, TypeRef,
    };

    pub use crate::Host;
}

/// A host built from a manifest: the type registry plus a ready composition strategy.
#[derive(Debug)]
pub struct Host {
    types: TypeRegistry,
    strategy: CompositionStrategy<ExtensionRegistry, StaticCatalog>,
}

impl Host {
    /// Loads and builds the host manifest at `path` using `config.hosting`.
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read or refers to unknown types or
    /// duplicate features.
    pub fn from_manifest(config: &WeaveConfig, path: impl AsRef<Path>) -> Result<Self, CompositionError> {
        let path = path.as_ref();
        let manifest = HostManifest::load(path)?;
        let host = Self::from_parts(config, &manifest)?;

        info!(manifest = %path.display(), "Host ready");
        Ok(host)
    }

    /// Builds the host from an in-memory manifest.
    ///
    /// # Errors
    /// Same as [`HostManifest::build`].
    pub fn from_parts(config: &WeaveConfig, manifest: &HostManifest) -> Result<Self, CompositionError> {
        let components = manifest.build(&config.hosting)?;
        Ok(Self {
            types: components.types,
            strategy: CompositionStrategy::new(
                components.registry,
                components.catalog,
                config.hosting.clone(),
            ),
        })
    }

    /// Computes the blueprint for one tenant.
    ///
    /// # Errors
    /// See [`CompositionStrategy::compose`].
    pub fn compose(
        &self,
        settings: &TenantSettings,
        descriptor: &TenantDescriptor,
    ) -> Result<ShellBlueprint, CompositionError> {
        self.strategy.compose(settings, descriptor)
    }

    #[must_use]
    pub const fn types(&self) -> &TypeRegistry {
        &self.types
    }

    #[must_use]
    pub const fn registry(&self) -> &ExtensionRegistry {
        self.strategy.registry()
    }

    #[must_use]
    pub const fn catalog(&self) -> &StaticCatalog {
        self.strategy.catalog()
    }
}
