use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::cli::ManifestArgs;

/// `pretty`: explicit flag; `None` defers to config, then to whether stdout is a terminal.
pub fn cmd_export(args: &ManifestArgs, pretty: Option<bool>) -> Result<()> {
    let (deployment, config) = super::load_deployment(args)?;
    let stitch = deployment.export()?;

    let pretty = pretty
        .or(config.output.pretty)
        .unwrap_or_else(|| io::stdout().is_terminal());
    let rendered = if pretty {
        stitch.to_json_pretty()?
    } else {
        stitch.to_json()?
    };

    tracing::debug!(
        machines = stitch.machines.len(),
        labels = stitch.labels.len(),
        containers = stitch.containers.len(),
        "exported deployment"
    );

    let mut out = io::stdout().lock();
    writeln!(out, "{}", rendered)?;
    Ok(())
}
