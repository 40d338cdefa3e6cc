use crate::catalog::LibraryCatalog;
use crate::error::{CompositionError, CompositionErrorExt};
use std::sync::Arc;
use tracing::trace;
use weave_domain::Feature;
use weave_domain::config::HostingConfig;

/// One pseudo-feature per host library, keyed by the library name.
///
/// Only libraries named with the host prefix take part. Each contributes its concrete
/// exports except the host entry type.
///
/// # Errors
/// Propagates the first library load failure, annotated with the library name.
pub fn builtin_features<C>(
    catalog: &C,
    hosting: &HostingConfig,
) -> Result<Vec<Arc<Feature>>, CompositionError>
where
    C: LibraryCatalog + ?Sized,
{
    let mut features = Vec::new();

    for library in catalog.libraries() {
        let name = library.name();
        if !name.starts_with(&hosting.library_prefix) {
            continue;
        }

        let types = library
            .load()
            .context(format!("library {name}"))?
            .into_iter()
            .filter(|ty| ty.is_concrete() && ty.full_name() != hosting.entry_type)
            .collect::<Vec<_>>();

        trace!(library = name, types = types.len(), "Builtin feature synthesized");
        features.push(Arc::new(Feature::new(name, name, types)));
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StaticCatalog, StaticLibrary};
    use weave_domain::{TypeDescriptor, TypeKind, TypeRef};

    fn ty(name: &str) -> TypeRef {
        TypeRef::new(TypeDescriptor::new(name).dependency())
    }

    #[test]
    fn skips_foreign_libraries() {
        let catalog = StaticCatalog::new()
            .with_library(StaticLibrary::new("Acme.Tools", vec![ty("Acme.Tools.Hammer")]))
            .with_library(StaticLibrary::new("Weave.Core", vec![ty("Weave.Core.Clock")]));

        let features = builtin_features(&catalog, &HostingConfig::default()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].id.as_str(), "Weave.Core");
        assert_eq!(features[0].extension_id, "Weave.Core");
    }

    #[test]
    fn drops_entry_type_and_non_concrete_exports() {
        let abstract_ty =
            TypeRef::new(TypeDescriptor::new("Weave.Core.Base").dependency().kind(TypeKind::Abstract));
        let catalog = StaticCatalog::new().with_library(StaticLibrary::new(
            "Weave.Hosting",
            vec![ty("Weave.Core.Clock"), ty("Weave.Hosting.DefaultHost"), abstract_ty],
        ));

        let features = builtin_features(&catalog, &HostingConfig::default()).unwrap();
        let names: Vec<&str> = features[0].types.iter().map(TypeRef::full_name).collect();
        assert_eq!(names, ["Weave.Core.Clock"]);
    }

    #[test]
    fn honors_configured_prefix() {
        let hosting = HostingConfig { library_prefix: "Acme".to_owned(), ..HostingConfig::default() };
        let catalog = StaticCatalog::new()
            .with_library(StaticLibrary::new("Acme.Tools", vec![ty("Acme.Tools.Hammer")]))
            .with_library(StaticLibrary::new("Weave.Core", vec![ty("Weave.Core.Clock")]));

        let features = builtin_features(&catalog, &hosting).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].id.as_str(), "Acme.Tools");
    }
}
