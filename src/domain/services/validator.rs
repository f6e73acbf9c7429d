//! Deployment validation
//!
//! Checks the assembled graph before export:
//! - every connection targets a deployed label
//! - every label-relative placement names a deployed label
//! - no service combines a floating IP, public ingress and several containers
//!
//! [`validate`] stops at the first violation in service declaration order;
//! [`violations`] collects all of them for reporting.

use std::collections::HashSet;

use crate::domain::entities::{Deployment, Service};
use crate::error::{StitchError, StitchResult};

/// Fail with the first violation found
pub fn validate(deployment: &Deployment) -> StitchResult<()> {
    let labels = deployed_labels(deployment);
    for service in deployment.services() {
        if let Some(err) = check_service(service, &labels).into_iter().next() {
            tracing::debug!(service = service.name(), error = %err, "validation failed");
            return Err(err);
        }
    }
    Ok(())
}

/// Every violation, in service declaration order
pub fn violations(deployment: &Deployment) -> Vec<StitchError> {
    let labels = deployed_labels(deployment);
    deployment
        .services()
        .iter()
        .flat_map(|service| check_service(service, &labels))
        .collect()
}

fn deployed_labels(deployment: &Deployment) -> HashSet<&str> {
    deployment.services().iter().map(|s| s.name()).collect()
}

fn check_service(service: &Service, labels: &HashSet<&str>) -> Vec<StitchError> {
    let mut errors = Vec::new();

    for conn in service.connections() {
        if !labels.contains(conn.to.as_str()) {
            errors.push(StitchError::UndeployedConnectionTarget {
                service: service.name().to_string(),
                target: conn.to.clone(),
            });
        }
    }

    for other in service.placements().iter().filter_map(|p| p.other_label()) {
        if !labels.contains(other) {
            errors.push(StitchError::UndeployedPlacementTarget {
                service: service.name().to_string(),
                label: other.to_string(),
            });
        }
    }

    if service.has_floating_ip()
        && !service.incoming_public().is_empty()
        && service.containers().len() > 1
    {
        errors.push(StitchError::UnsupportedFloatingIpMultiContainer {
            service: service.name().to_string(),
        });
    }

    errors
}
