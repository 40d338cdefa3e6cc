//! Host libraries: the compiled-in module table the host builds its own features from.

use crate::error::CompositionError;
use std::fmt::Debug;
use std::sync::Arc;
use weave_domain::TypeRef;

/// A unit of host code exporting implementation types.
pub trait Library: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Exported types, in export order.
    ///
    /// # Errors
    /// Implementations report unreadable libraries as [`CompositionError::LibraryLoad`].
    fn load(&self) -> Result<Vec<TypeRef>, CompositionError>;
}

/// Enumerates the libraries available to the host process.
pub trait LibraryCatalog {
    fn libraries(&self) -> Vec<Arc<dyn Library>>;
}

impl<C: LibraryCatalog + ?Sized> LibraryCatalog for Arc<C> {
    fn libraries(&self) -> Vec<Arc<dyn Library>> {
        (**self).libraries()
    }
}

/// A library whose exports are known at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLibrary {
    name: String,
    types: Vec<TypeRef>,
}

impl StaticLibrary {
    pub fn new(name: impl Into<String>, types: Vec<TypeRef>) -> Self {
        Self { name: name.into(), types }
    }

    #[must_use = "Adds an exported type"]
    pub fn with_type(mut self, type_ref: TypeRef) -> Self {
        self.types.push(type_ref);
        self
    }
}

impl Library for StaticLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<TypeRef>, CompositionError> {
        Ok(self.types.clone())
    }
}

/// Catalog populated at process start.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    libraries: Vec<Arc<dyn Library>>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Adds a library to the catalog"]
    pub fn with_library(mut self, library: impl Library + 'static) -> Self {
        self.push(Arc::new(library));
        self
    }

    pub fn push(&mut self, library: Arc<dyn Library>) {
        self.libraries.push(library);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl LibraryCatalog for StaticCatalog {
    fn libraries(&self) -> Vec<Arc<dyn Library>> {
        self.libraries.clone()
    }
}
