//! Identity contracts (ID-001 through ID-004)
//!
//! Exported IDs are how the controller tells entities apart between
//! deployments, so they must be stable, distinct where the program made
//! distinct objects, and shared where it reused one.

use std::collections::HashSet;

use stitch::{BuildSession, Container, Deployment, DeploymentOptions, Machine, MachineOptions, Stitch};

fn amazon() -> MachineOptions {
    MachineOptions {
        provider: "Amazon".to_string(),
        size: "m4.large".to_string(),
        ..Default::default()
    }
}

fn build(session: &BuildSession) -> Stitch {
    let worker = Machine::new(session, amazon()).as_worker(session);
    let mut deployment = Deployment::new(DeploymentOptions::default());
    deployment
        .deploy(worker.as_master(session))
        .unwrap();
    deployment.deploy(worker.replicate(session, 3)).unwrap();

    let redis = Container::from_image(session, "redis");
    let web = session.service("web", Container::from_image(session, "nginx").replicate(session, 2));
    let cache = session.service("cache", vec![redis.clone(), redis]);
    deployment.deploy([web, cache]).unwrap();

    deployment.export().unwrap()
}

/// CONTRACT ID-001: Same program, fresh session, same document
mod determinism {
    use super::*;

    #[test]
    fn contract_replaying_a_build_reproduces_every_id() {
        let first = build(&BuildSession::new());
        let second = build(&BuildSession::new());

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn contract_exporting_twice_is_identical() {
        let session = BuildSession::new();
        let mut deployment = Deployment::new(DeploymentOptions::default());
        deployment
            .deploy(Machine::new(&session, amazon()).replicate(&session, 2))
            .unwrap();

        assert_eq!(deployment.export().unwrap(), deployment.export().unwrap());
    }
}

/// CONTRACT ID-002: Distinct objects export distinct IDs
mod distinctness {
    use super::*;

    #[test]
    fn contract_replicas_never_collide() {
        let stitch = build(&BuildSession::new());

        let machine_ids: HashSet<_> = stitch.machines.iter().map(|m| &m.id).collect();
        assert_eq!(machine_ids.len(), stitch.machines.len());

        let web = stitch.label("web").unwrap();
        assert_eq!(web.ids.len(), 2);
        assert_ne!(web.ids[0], web.ids[1]);
    }

    #[test]
    fn contract_look_alike_containers_in_different_services_differ() {
        let session = BuildSession::new();
        let a = session.service("a", vec![Container::from_image(&session, "img")]);
        let b = session.service("b", vec![Container::from_image(&session, "img")]);

        let mut deployment = Deployment::new(DeploymentOptions::default());
        deployment.deploy([a, b]).unwrap();
        let stitch = deployment.export().unwrap();

        assert_eq!(stitch.containers.len(), 2);
        assert_ne!(stitch.labels[0].ids, stitch.labels[1].ids);
    }
}

/// CONTRACT ID-003: One object referenced twice exports once
mod sharing {
    use super::*;

    #[test]
    fn contract_shared_container_exports_once_with_one_id() {
        let stitch = build(&BuildSession::new());

        let cache = stitch.label("cache").unwrap();
        assert_eq!(cache.ids.len(), 2);
        assert_eq!(cache.ids[0], cache.ids[1]);

        // 2 nginx replicas + 1 redis
        assert_eq!(stitch.containers.len(), 3);
        assert!(stitch.container(&cache.ids[0]).is_some());
    }

    #[test]
    fn contract_edits_after_sharing_apply_to_every_reference() {
        let session = BuildSession::new();
        let app = Container::from_image(&session, "app");
        let a = session.service("a", vec![app.clone()]);
        app.set_env("MODE", "production");
        let b = session.service("b", vec![app.clone()]);

        let machine = Machine::new(&session, amazon());
        let mut deployment = Deployment::new(DeploymentOptions::default());
        deployment.deploy(machine.clone()).unwrap();
        machine.update(|m| m.disk_size = 64);
        deployment.deploy(machine).unwrap();
        deployment.deploy([a, b]).unwrap();

        let stitch = deployment.export().unwrap();

        assert_eq!(stitch.containers.len(), 1);
        assert_eq!(stitch.labels[0].ids, stitch.labels[1].ids);
        assert_eq!(
            stitch.containers[0].env.get("MODE").map(String::as_str),
            Some("production")
        );
        assert_eq!(stitch.machines[0].id, stitch.machines[1].id);
        assert!(stitch.machines.iter().all(|m| m.disk_size == 64));
    }

    #[test]
    fn contract_every_label_id_resolves_to_a_container() {
        let stitch = build(&BuildSession::new());
        for label in &stitch.labels {
            for id in &label.ids {
                assert!(
                    stitch.container(id).is_some(),
                    "label {} refers to missing container {}",
                    label.name,
                    id
                );
            }
        }
    }
}

/// CONTRACT ID-004: IDs depend on content and build order, never on service names
mod independence {
    use super::*;

    #[test]
    fn contract_renaming_services_keeps_container_ids() {
        let ids = |name: &str| {
            let session = BuildSession::new();
            let svc = session.service(name, vec![Container::from_image(&session, "nginx")]);
            let mut deployment = Deployment::new(DeploymentOptions::default());
            deployment.deploy(svc).unwrap();
            deployment.export().unwrap().labels[0].ids.clone()
        };

        assert_eq!(ids("web"), ids("frontend"));
    }

    #[test]
    fn contract_content_change_changes_id() {
        let ids = |image: &str| {
            let session = BuildSession::new();
            let svc = session.service("web", vec![Container::from_image(&session, image)]);
            let mut deployment = Deployment::new(DeploymentOptions::default());
            deployment.deploy(svc).unwrap();
            deployment.export().unwrap().labels[0].ids.clone()
        };

        assert_ne!(ids("nginx:1"), ids("nginx:2"));
    }
}
