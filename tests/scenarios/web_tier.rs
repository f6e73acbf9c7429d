//! Scenario: Web tier from a manifest
//!
//! Journey: An operator describes a small web tier in a manifest, checks it,
//! exports it, and later converts the manifest to YAML.
//!
//! Steps:
//! 1. Writes the TOML manifest
//! 2. Runs `stitch check` - no problems
//! 3. Runs `stitch export` - gets the exchange document
//! 4. Rewrites the manifest as YAML and exports again
//!
//! Success Criteria:
//! - Check passes
//! - The document carries every deployed entity
//! - The YAML manifest exports the identical document

use crate::common::*;

#[test]
fn scenario_web_tier_check_then_export() {
    let env = TestEnv::new();

    // Step 1
    let manifest = env.write_project_file("deploy/web.toml", WEB_TIER);

    // Step 2
    let result = env.run(&["check", arg(&manifest)]);
    assert!(result.success, "check failed:\n{}", result.combined_output());
    assert!(result.stdout.starts_with("ok: "), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("2 services, 4 machines"));

    // Step 3
    let result = env.run(&["export", arg(&manifest), "--compact"]);
    assert!(result.success, "export failed:\n{}", result.combined_output());
    assert_eq!(result.stdout.lines().count(), 1);

    let stitch = result.stitch();
    assert_eq!(stitch.namespace, "web-tier");
    assert_eq!(stitch.admin_acl, vec!["local"]);
    assert_eq!(stitch.max_price, 0.5);
    assert_eq!(stitch.machines.len(), 4);
    assert_eq!(stitch.containers.len(), 3);
    assert_eq!(stitch.label("web").unwrap().ids.len(), 2);
    assert_eq!(stitch.label("db").unwrap().annotations, vec!["stateful"]);
    assert_eq!(stitch.connections.len(), 2);
    assert_eq!(stitch.placements.len(), 1);
    assert_eq!(stitch.placements[0].other_label, "web");
    assert_eq!(stitch.invariants.len(), 2);
    assert!(!stitch.invariants[1].target);

    let worker_ids: std::collections::HashSet<_> = stitch
        .machines
        .iter()
        .filter(|m| m.role == stitch::Role::Worker)
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(worker_ids.len(), 3);

    // Step 4
    let yaml = env.write_project_file("deploy/web.yaml", WEB_TIER_YAML);
    let from_yaml = env.run(&["export", arg(&yaml), "--compact"]);
    assert!(from_yaml.success, "yaml export failed:\n{}", from_yaml.combined_output());
    assert_eq!(from_yaml.stitch(), stitch);
}

#[test]
fn scenario_pretty_output_parses_to_same_document() {
    let env = TestEnv::new();
    let manifest = env.write_project_file("web.toml", WEB_TIER);

    let compact = env.run(&["export", arg(&manifest), "--compact"]);
    let pretty = env.run(&["export", arg(&manifest), "--pretty"]);

    assert!(pretty.stdout.lines().count() > 1);
    assert_eq!(pretty.stitch(), compact.stitch());
}
