//! Naming contracts (NAME-001, NAME-002)

use stitch::{BuildSession, Container, Deployment, DeploymentOptions, Peer};

/// CONTRACT NAME-001: Labels are unique within a session
mod unique_labels {
    use super::*;

    #[test]
    fn contract_repeated_names_get_numeric_suffixes() {
        let session = BuildSession::new();
        let names: Vec<String> = (0..4)
            .map(|_| session.service("x", Vec::new()).name().to_string())
            .collect();

        assert_eq!(names, vec!["x", "x2", "x3", "x4"]);
    }

    #[test]
    fn contract_sessions_do_not_share_counters() {
        let first = BuildSession::new();
        let second = BuildSession::new();

        assert_eq!(first.service("web", Vec::new()).name(), "web");
        assert_eq!(second.service("web", Vec::new()).name(), "web");
        assert_eq!(first.service("web", Vec::new()).name(), "web2");
    }

    #[test]
    fn contract_connections_follow_the_renamed_label() {
        let session = BuildSession::new();
        let _first = session.service("db", Vec::new());
        let db = session.service("db", Vec::new());
        let mut web = session.service("web", vec![Container::from_image(&session, "nginx")]);
        web.connect(5432, Peer::from(&db)).unwrap();

        let mut deployment = Deployment::new(DeploymentOptions::default());
        deployment.deploy([web, db]).unwrap();
        let stitch = deployment.export().unwrap();

        assert_eq!(stitch.connections[0].to, "db2");
    }
}

/// CONTRACT NAME-002: Hostnames derive from the label
mod hostnames {
    use super::*;

    #[test]
    fn contract_hostname_and_children() {
        let session = BuildSession::new();
        let svc = session.service(
            "api",
            Container::from_image(&session, "api").replicate(&session, 3),
        );

        assert_eq!(svc.hostname(), "api.q");
        assert_eq!(svc.children(), vec!["1.api.q", "2.api.q", "3.api.q"]);
    }
}
