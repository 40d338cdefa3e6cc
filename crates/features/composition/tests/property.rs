use proptest::prelude::*;
use std::sync::Arc;
use weave_composition::{assemble, suppressed_types};
use weave_domain::{
    BlueprintKind, ComponentParameter, Feature, TenantDescriptor, TenantSettings, TypeDescriptor,
    TypeRef,
};

const POOL: usize = 6;

fn type_name(index: usize) -> String {
    format!("NS.T{index}")
}

fn type_strategy() -> impl Strategy<Value = TypeRef> {
    (0..POOL, 0u8..4, proptest::collection::vec(0..POOL, 0..2)).prop_map(
        |(index, caps, replaces)| {
            let mut descriptor = TypeDescriptor::new(type_name(index));
            if caps & 1 != 0 {
                descriptor = descriptor.module();
            }
            if caps & 2 != 0 {
                descriptor = descriptor.dependency();
            }
            for target in replaces {
                descriptor = descriptor.replaces(type_name(target));
            }
            TypeRef::new(descriptor)
        },
    )
}

fn features_strategy() -> impl Strategy<Value = Vec<Arc<Feature>>> {
    proptest::collection::vec(proptest::collection::vec(type_strategy(), 0..5), 0..4).prop_map(
        |features| {
            features
                .into_iter()
                .enumerate()
                .map(|(i, types)| Arc::new(Feature::new(format!("F{i}"), "Prop", types)))
                .collect()
        },
    )
}

fn descriptor_strategy() -> impl Strategy<Value = TenantDescriptor> {
    proptest::collection::vec((0..POOL, 0u8..3), 0..6).prop_map(|params| {
        params.into_iter().fold(TenantDescriptor::default(), |descriptor, (index, value)| {
            descriptor.with_parameter(ComponentParameter::new(
                type_name(index),
                "Setting",
                value.to_string(),
            ))
        })
    })
}

proptest! {
    #[test]
    fn every_surviving_candidate_is_listed_once_per_capability(
        features in features_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let blueprint = assemble(&TenantSettings::new("prop"), &descriptor, &features);
        let suppressed = suppressed_types(&features);
        let mut expected_len = 0;

        for feature in &features {
            for (position, ty) in feature.types.iter().enumerate() {
                let alive = !suppressed.contains(ty.full_name());
                for (kind, capable) in [
                    (BlueprintKind::Dependency, ty.is_dependency()),
                    (BlueprintKind::Module, ty.is_module()),
                ] {
                    let expected = usize::from(alive && capable);
                    expected_len += expected;

                    let listed = blueprint
                        .dependencies
                        .iter()
                        .filter(|entry| entry.kind == kind && Arc::ptr_eq(&entry.feature, feature))
                        .filter(|entry| std::ptr::eq(entry.type_ref.descriptor(), ty.descriptor()))
                        .count();
                    prop_assert_eq!(listed, expected, "type #{} of {} as {:?}", position, feature.id, kind);
                }
            }
        }

        prop_assert_eq!(blueprint.dependencies.len(), expected_len);
        for entry in &blueprint.dependencies {
            prop_assert!(!suppressed.contains(entry.type_ref.full_name()));
        }
    }

    #[test]
    fn dependencies_precede_modules(
        features in features_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let blueprint = assemble(&TenantSettings::new("prop"), &descriptor, &features);

        let first_module = blueprint
            .dependencies
            .iter()
            .position(|entry| entry.kind == BlueprintKind::Module)
            .unwrap_or(blueprint.dependencies.len());
        prop_assert!(
            blueprint.dependencies[first_module..].iter().all(|e| e.kind == BlueprintKind::Module)
        );
    }

    #[test]
    fn parameters_bind_by_full_name_in_order(
        features in features_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let blueprint = assemble(&TenantSettings::new("prop"), &descriptor, &features);

        for entry in &blueprint.dependencies {
            let expected: Vec<ComponentParameter> = match entry.kind {
                BlueprintKind::Dependency => descriptor
                    .parameters
                    .iter()
                    .filter(|p| p.component == entry.type_ref.full_name())
                    .cloned()
                    .collect(),
                BlueprintKind::Module => Vec::new(),
            };
            prop_assert_eq!(&entry.parameters, &expected);
        }
    }

    #[test]
    fn assembly_is_deterministic(
        features in features_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let settings = TenantSettings::new("prop");
        prop_assert_eq!(
            assemble(&settings, &descriptor, &features),
            assemble(&settings, &descriptor, &features)
        );
    }
}
