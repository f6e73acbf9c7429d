use std::io::{self, Write};

use anyhow::Result;

use stitch::violations;

use crate::cli::ManifestArgs;

pub fn cmd_check(args: &ManifestArgs, json: bool) -> Result<()> {
    let (deployment, _config) = super::load_deployment(args)?;
    let problems = violations(&deployment);

    let mut out = io::stdout().lock();
    if json {
        for problem in &problems {
            write_event(
                &mut out,
                &serde_json::json!({
                    "event": "violation",
                    "command": "check",
                    "service": problem.service(),
                    "message": problem.to_string(),
                }),
            )?;
        }
        write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "manifest": args.manifest.display().to_string(),
                "services": deployment.services().len(),
                "violations": problems.len(),
                "ok": problems.is_empty(),
            }),
        )?;
    } else if problems.is_empty() {
        writeln!(
            out,
            "ok: {} ({} services, {} machines)",
            args.manifest.display(),
            deployment.services().len(),
            deployment.machines().len()
        )?;
    } else {
        for problem in &problems {
            writeln!(out, "error: {}", problem)?;
        }
        writeln!(out, "{} problem(s) found in {}", problems.len(), args.manifest.display())?;
    }
    out.flush()?;

    if !problems.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Write a single NDJSON event (one JSON object per line).
fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
