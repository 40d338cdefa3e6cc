use crate::feature::FeatureId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle state of a tenant as persisted by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantState {
    #[default]
    Uninitialized,
    Initializing,
    Running,
    Disabled,
    Invalid,
}

/// Identity of a tenant. Composition passes it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub name: String,
    #[serde(default)]
    pub state: TenantState,
    /// Free-form host settings (connection strings, URL prefixes, ...).
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl TenantSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    #[must_use = "Sets the tenant state"]
    pub fn with_state(mut self, state: TenantState) -> Self {
        self.state = state;
        self
    }
}

/// A construction parameter targeted at one component type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentParameter {
    /// Full name of the component type this parameter is bound to.
    pub component: String,
    pub name: String,
    pub value: String,
}

impl ComponentParameter {
    pub fn new(
        component: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { component: component.into(), name: name.into(), value: value.into() }
    }
}

/// What a tenant has enabled and how its components are parameterized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantDescriptor {
    pub serial_number: u64,
    /// Declared feature ids, in declaration order.
    pub features: Vec<FeatureId>,
    pub parameters: Vec<ComponentParameter>,
}

impl TenantDescriptor {
    #[must_use = "Adds a feature to the descriptor"]
    pub fn with_feature(mut self, id: impl Into<FeatureId>) -> Self {
        self.features.push(id.into());
        self
    }

    #[must_use = "Adds a component parameter to the descriptor"]
    pub fn with_parameter(mut self, parameter: ComponentParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Whether `id` is among the declared features (dependencies are not expanded).
    #[must_use]
    pub fn declares(&self, id: &str) -> bool {
        self.features.iter().any(|f| f.as_str() == id)
    }

    /// Parameters bound to `component`, in declaration order.
    pub fn parameters_for<'a>(
        &'a self,
        component: &'a str,
    ) -> impl Iterator<Item = &'a ComponentParameter> + 'a {
        self.parameters.iter().filter(move |p| p.component == component)
    }
}
