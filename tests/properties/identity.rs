//! Property tests for identity assignment.

use std::collections::HashSet;

use proptest::prelude::*;

use stitch::domain::services::assign_ids;
use stitch::{BuildSession, Container, Deployment, DeploymentOptions, Machine, MachineOptions};

fn image() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,8}(:[0-9]{1,2})?").unwrap()
}

fn provider() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Amazon".to_string()),
        Just("Google".to_string()),
        Just("DigitalOcean".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `replicate(n)` yields n pairwise distinct IDs.
    #[test]
    fn property_replicas_get_distinct_ids(
        image in image(),
        n in 1usize..12,
    ) {
        let session = BuildSession::new();
        let replicas = Container::from_image(&session, image).replicate(&session, n);

        let ids = assign_ids(&replicas).unwrap();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), n);
    }

    /// PROPERTY: Repeating a reference repeats its ID; nothing else does.
    #[test]
    fn property_repeated_references_share_ids(
        image in image(),
        picks in proptest::collection::vec(0usize..4, 1..16),
    ) {
        let session = BuildSession::new();
        let pool = Container::from_image(&session, image).replicate(&session, 4);
        let refs: Vec<&Container> = picks.iter().map(|&i| &pool[i]).collect();

        let ids = assign_ids(&refs).unwrap();
        for (a, &pa) in picks.iter().enumerate() {
            for (b, &pb) in picks.iter().enumerate() {
                prop_assert_eq!(pa == pb, ids[a] == ids[b]);
            }
        }
    }

    /// PROPERTY: IDs depend on token order, not on the order entities are listed.
    #[test]
    fn property_ids_ignore_listing_order(
        provider in provider(),
        n in 2usize..8,
        rotate in 0usize..8,
    ) {
        let session = BuildSession::new();
        let options = MachineOptions { provider, ..Default::default() };
        let machines = Machine::new(&session, options).replicate(&session, n);

        let ids = assign_ids(&machines).unwrap();

        let mut rotated = machines.clone();
        rotated.rotate_left(rotate % n);
        let mut rotated_ids = assign_ids(&rotated).unwrap();
        rotated_ids.rotate_right(rotate % n);

        prop_assert_eq!(ids, rotated_ids);
    }

    /// PROPERTY: Exporting is a pure function of the deployment.
    #[test]
    fn property_export_is_repeatable(
        images in proptest::collection::vec(image(), 0..6),
        machines in 0usize..4,
    ) {
        let session = BuildSession::new();
        let mut deployment = Deployment::new(DeploymentOptions::default());
        deployment
            .deploy(Machine::new(&session, MachineOptions::default()).replicate(&session, machines))
            .unwrap();
        let containers = images
            .into_iter()
            .map(|image| Container::from_image(&session, image))
            .collect();
        deployment.deploy(session.service("svc", containers)).unwrap();

        let first = deployment.export().unwrap();
        let second = deployment.export().unwrap();
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        prop_assert_eq!(first.machines.len(), machines);
    }
}
