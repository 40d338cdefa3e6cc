//! # Domain Models
//!
//! Pure data for tenant shell composition: tenants, features, type handles and the
//! blueprint handed to the container builder.
//! This crate keeps minimal dependencies (`serde`, `bitflags`): no I/O and no composition logic.

pub mod blueprint;
pub mod capabilities;
pub mod config;
pub mod constants;
pub mod feature;
pub mod tenant;
pub mod types;

pub use crate::blueprint::{BlueprintKind, DependencyBlueprint, ShellBlueprint};
pub use crate::capabilities::Capabilities;
pub use crate::feature::{Feature, FeatureId};
pub use crate::tenant::{ComponentParameter, TenantDescriptor, TenantSettings, TenantState};
pub use crate::types::{Component, TypeDescriptor, TypeKind, TypeRef};
