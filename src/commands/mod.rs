pub mod check;
pub mod export;

use std::path::Path;

use anyhow::{Context, Result};

use stitch::{BuildSession, Config, Deployment, Manifest};

use crate::cli::ManifestArgs;

/// Load config from the manifest's directory, then build the manifest with
/// CLI overrides layered on top of its `[deployment]` section.
pub fn load_deployment(args: &ManifestArgs) -> Result<(Deployment, Config)> {
    let project_root = args
        .manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = Config::load_or_default(Some(project_root));

    let mut manifest = Manifest::from_path(&args.manifest)
        .with_context(|| format!("failed to load {}", args.manifest.display()))?;
    if let Some(namespace) = &args.namespace {
        manifest.deployment.namespace = Some(namespace.clone());
    }
    if let Some(max_price) = args.max_price {
        manifest.deployment.max_price = Some(max_price);
    }

    let session = BuildSession::new();
    let deployment = manifest
        .build(&session, config.deployment_options())
        .with_context(|| format!("failed to build {}", args.manifest.display()))?;
    Ok((deployment, config))
}
