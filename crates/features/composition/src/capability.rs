//! Explicit capability registry.
//!
//! Implementation types declare what they are once, at registration time. Everything
//! downstream (feature manifests, host libraries, classification) works from the
//! resulting [`TypeRef`]s.

use crate::error::CompositionError;
use fxhash::FxHashMap;
use tracing::warn;
use weave_domain::{Component, TypeDescriptor, TypeRef};

#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: FxHashMap<String, TypeRef>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a type. A later registration under the same full name replaces the earlier one.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> TypeRef {
        let type_ref = TypeRef::new(descriptor);
        if let Some(previous) =
            self.types.insert(type_ref.full_name().to_owned(), type_ref.clone())
            && previous != type_ref
        {
            warn!(type_name = %type_ref, "Type registration overridden");
        }
        type_ref
    }

    pub fn register_component<T: Component>(&mut self) -> TypeRef {
        self.register(TypeRef::of::<T>().descriptor().clone())
    }

    #[must_use]
    pub fn resolve(&self, full_name: &str) -> Option<&TypeRef> {
        self.types.get(full_name)
    }

    /// Resolves names in order.
    ///
    /// # Errors
    /// Returns [`CompositionError::UnknownType`] for the first name that was never registered.
    pub fn resolve_all<I, S>(&self, names: I) -> Result<Vec<TypeRef>, CompositionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.resolve(name).cloned().ok_or_else(|| CompositionError::UnknownType {
                    message: name.to_owned().into(),
                    context: None,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_domain::Capabilities;

    struct Clock;

    impl Component for Clock {
        const FULL_NAME: &'static str = "Weave.Core.Clock";
        const CAPABILITIES: Capabilities = Capabilities::DEPENDENCY;
    }

    #[test]
    fn registers_and_resolves() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::new("NS.M1").module());
        registry.register_component::<Clock>();

        assert_eq!(registry.len(), 2);
        assert!(registry.resolve("NS.M1").is_some_and(TypeRef::is_module));
        assert!(registry.resolve("Weave.Core.Clock").is_some_and(TypeRef::is_dependency));
        assert!(registry.resolve("NS.Missing").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::new("NS.X").module());
        registry.register(TypeDescriptor::new("NS.X").dependency());

        let ty = registry.resolve("NS.X").expect("registered");
        assert!(ty.is_dependency());
        assert!(!ty.is_module());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_all_reports_first_unknown_name() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::new("NS.A"));

        let resolved = registry.resolve_all(["NS.A"]).expect("known");
        assert_eq!(resolved.len(), 1);

        let err = registry.resolve_all(["NS.A", "NS.B", "NS.C"]).unwrap_err();
        assert!(matches!(err, CompositionError::UnknownType { ref message, .. } if message == "NS.B"));
    }
}
