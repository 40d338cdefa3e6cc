//! # Composition
//!
//! Computes, for one tenant, the ordered list of implementation types (and their
//! construction parameters) to register into the tenant's isolated container.
//!
//! * [`FeatureRegistry`] resolves what a tenant has enabled; [`ExtensionRegistry`] is the
//!   in-memory implementation with dependency expansion and a shared feature cache. The host
//!   feature is never passed to the registry; builtin features stand in for it.
//! * [`LibraryCatalog`] lists host libraries; [`StaticCatalog`] is the compiled-in table.
//! * [`CompositionStrategy::compose`] expands features, appends builtin host features when
//!   the tenant declares the host feature, applies suppression and classifies types.
//! * [`HostManifest`] builds all of the above from a TOML/JSON file.
//!
//! ## Example
//!
//! ```rust
//! use weave_composition::{CompositionStrategy, ExtensionRegistry, FeatureManifest, StaticCatalog};
//! use weave_domain::config::HostingConfig;
//! use weave_domain::{TenantDescriptor, TenantSettings, TypeDescriptor, TypeRef};
//!
//! let hosting = HostingConfig::default();
//! let mut registry = ExtensionRegistry::new(&hosting);
//! registry
//!     .register(
//!         FeatureManifest::new("Blog", "Acme")
//!             .with_type(TypeRef::new(TypeDescriptor::new("Acme.Blog.Module").module())),
//!     )
//!     .unwrap();
//!
//! let strategy = CompositionStrategy::new(registry, StaticCatalog::new(), hosting);
//! let blueprint = strategy
//!     .compose(&TenantSettings::new("default"), &TenantDescriptor::default().with_feature("Blog"))
//!     .unwrap();
//!
//! assert!(blueprint.contains("Acme.Blog.Module"));
//! ```

mod builtin;
mod capability;
mod catalog;
mod engine;
mod error;
mod manifest;
mod registry;

pub use crate::builtin::builtin_features;
pub use crate::capability::TypeRegistry;
pub use crate::catalog::{Library, LibraryCatalog, StaticCatalog, StaticLibrary};
pub use crate::engine::{CompositionStrategy, assemble, suppressed_types};
pub use crate::error::{CompositionError, CompositionErrorExt};
pub use crate::manifest::{
    ExtensionManifest, FeatureEntry, HostComponents, HostManifest, LibraryManifest,
};
pub use crate::registry::{ExtensionRegistry, FeatureManifest, FeatureRegistry};
