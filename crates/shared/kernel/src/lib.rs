//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns the host-level plumbing every application needs
//! before composition can run.
//!
//! ## Config loading
//! ```rust,no_run
//! use weave_kernel::config::load_config;
//! use weave_kernel::domain::config::WeaveConfig;
//!
//! let cfg: WeaveConfig = load_config(Some("weave.toml")).unwrap_or_default();
//! assert!(!cfg.hosting.library_prefix.is_empty());
//! ```
pub mod config;

pub use weave_domain as domain;
