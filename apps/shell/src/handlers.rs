use crate::args::OutputFormat;
use crate::render;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use weave::Host;
use weave::domain::config::WeaveConfig;
use weave::domain::{TenantDescriptor, TenantSettings};
use weave::kernel::config::load_document;

/// On-disk tenant: identity plus what it has enabled.
#[derive(Debug, Deserialize)]
struct TenantFile {
    settings: TenantSettings,
    #[serde(default)]
    descriptor: TenantDescriptor,
}

/// Composes the tenant in `tenant` against the host in `manifest` and prints the blueprint.
///
/// # Errors
/// Returns an error if either file cannot be loaded or composition fails.
pub(crate) fn compose(config: &WeaveConfig, manifest: &Path, tenant: &Path, format: OutputFormat) -> Result<()> {
    let host = Host::from_manifest(config, manifest)?;
    let tenant: TenantFile = load_document(tenant)
        .with_context(|| format!("Failed to load tenant {}", tenant.display()))?;

    info!(tenant = %tenant.settings.name, "Composing tenant");
    let blueprint = host.compose(&tenant.settings, &tenant.descriptor)?;

    match format {
        OutputFormat::Table => println!("{}", render::blueprint_table(&blueprint)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&blueprint)?),
    }

    Ok(())
}

/// Lists the features registered by `manifest`.
///
/// # Errors
/// Returns an error if the manifest cannot be loaded or built.
pub(crate) fn features(config: &WeaveConfig, manifest: &Path, format: OutputFormat) -> Result<()> {
    let host = Host::from_manifest(config, manifest)?;
    let rows = render::feature_rows(host.registry());

    if rows.is_empty() {
        println!("No features registered in {}", manifest.display());
        return Ok(());
    }

    match format {
        OutputFormat::Table => println!("{}", render::feature_table(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}
