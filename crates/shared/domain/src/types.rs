//! Implementation type handles.
//!
//! A [`TypeRef`] stands for a loadable implementation type. Instead of asking the runtime
//! what a type implements, every type carries the record it was registered with: its
//! capability tags and the names of the types it replaces.

use crate::capabilities::Capabilities;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Shape of an exported type. Only [`TypeKind::Class`] can be instantiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Abstract,
    Interface,
}

/// Registration record of an implementation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(rename = "name")]
    pub full_name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub capabilities: Capabilities,
    /// Full names of types suppressed in favour of this one.
    #[serde(default)]
    pub replaces: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            kind: TypeKind::Class,
            capabilities: Capabilities::empty(),
            replaces: Vec::new(),
        }
    }

    #[must_use = "Declares the type as a module"]
    pub fn module(mut self) -> Self {
        self.capabilities |= Capabilities::MODULE;
        self
    }

    #[must_use = "Declares the type as a dependency"]
    pub fn dependency(mut self) -> Self {
        self.capabilities |= Capabilities::DEPENDENCY;
        self
    }

    #[must_use = "Sets the type kind"]
    pub const fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use = "Adds a suppression record"]
    pub fn replaces(mut self, full_name: impl Into<String>) -> Self {
        self.replaces.push(full_name.into());
        self
    }
}

/// Compile-time registration of a Rust type.
///
/// ```rust
/// use weave_domain::{Capabilities, Component, TypeRef};
///
/// struct SqlClock;
///
/// impl Component for SqlClock {
///     const FULL_NAME: &'static str = "Acme.Data.SqlClock";
///     const CAPABILITIES: Capabilities = Capabilities::DEPENDENCY;
///     const REPLACES: &'static [&'static str] = &["Weave.Core.Clock"];
/// }
///
/// let ty = TypeRef::of::<SqlClock>();
/// assert!(ty.is_dependency());
/// assert_eq!(ty.replaced_types().collect::<Vec<_>>(), ["Weave.Core.Clock"]);
/// ```
pub trait Component: 'static {
    const FULL_NAME: &'static str;
    const CAPABILITIES: Capabilities;
    const KIND: TypeKind = TypeKind::Class;
    const REPLACES: &'static [&'static str] = &[];
}

/// Cheap-to-clone handle to a registered implementation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(Arc<TypeDescriptor>);

impl TypeRef {
    #[must_use]
    pub fn new(descriptor: TypeDescriptor) -> Self {
        Self(Arc::new(descriptor))
    }

    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::new(TypeDescriptor {
            full_name: T::FULL_NAME.to_owned(),
            kind: T::KIND,
            capabilities: T::CAPABILITIES,
            replaces: T::REPLACES.iter().map(|name| (*name).to_owned()).collect(),
        })
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.0.full_name
    }

    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.0.kind
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.0.capabilities
    }

    #[must_use]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.0
    }

    #[must_use]
    pub fn is_module(&self) -> bool {
        self.0.capabilities.contains(Capabilities::MODULE)
    }

    #[must_use]
    pub fn is_dependency(&self) -> bool {
        self.0.capabilities.contains(Capabilities::DEPENDENCY)
    }

    #[must_use]
    pub fn is_concrete(&self) -> bool {
        self.0.kind == TypeKind::Class
    }

    /// Full names this type suppresses.
    pub fn replaced_types(&self) -> impl Iterator<Item = &str> {
        self.0.replaces.iter().map(String::as_str)
    }
}

impl From<TypeDescriptor> for TypeRef {
    fn from(descriptor: TypeDescriptor) -> Self {
        Self::new(descriptor)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.full_name())
    }
}
