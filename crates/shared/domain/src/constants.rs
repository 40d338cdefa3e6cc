//! Well-known identifiers of the host itself.

/// Feature id that marks the host's own services as enabled for a tenant.
pub const HOST_FEATURE: &str = "Weave.Hosting";

/// Name prefix shared by every statically linked host library.
pub const HOST_LIBRARY_PREFIX: &str = "Weave";

/// The host entry point. It is constructed by the bootstrap, never by a tenant container.
pub const HOST_ENTRY_TYPE: &str = "Weave.Hosting.DefaultHost";

pub const MODULE: &str = "module";
pub const DEPENDENCY: &str = "dependency";
