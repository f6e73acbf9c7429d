//! Test fixtures - reusable manifests.

/// Two masters-and-workers machine groups, a public web tier and a database
pub const WEB_TIER: &str = r#"
[deployment]
namespace = "web-tier"
max_price = 0.5
admin_acl = ["local"]

[[machines]]
name = "master"
provider = "Amazon"
role = "Master"
size = "m4.large"

[[machines]]
name = "workers"
provider = "Amazon"
role = "Worker"
size = "m4.large"
replicas = 3

[[containers]]
key = "nginx"
image = "nginx:1.25"
replicas = 2

[[containers]]
key = "postgres"
image = "postgres:16"
env = { POSTGRES_DB = "app" }

[[services]]
name = "web"
containers = ["nginx"]
public_ingress = [80]
connections = [{ to = "db", ports = 5432 }]

[[services]]
name = "db"
containers = ["postgres"]
annotations = ["stateful"]

[[services.placements]]
exclusive = true
label = "web"

[[invariants]]
form = "reach"
nodes = ["web", "db"]

[[invariants]]
form = "reach"
nodes = ["public", "db"]
target = false
"#;

/// Same deployment as `WEB_TIER`, written as YAML
pub const WEB_TIER_YAML: &str = r#"
deployment:
  namespace: web-tier
  max_price: 0.5
  admin_acl: [local]
machines:
  - name: master
    provider: Amazon
    role: Master
    size: m4.large
  - name: workers
    provider: Amazon
    role: Worker
    size: m4.large
    replicas: 3
containers:
  - key: nginx
    image: "nginx:1.25"
    replicas: 2
  - key: postgres
    image: "postgres:16"
    env:
      POSTGRES_DB: app
services:
  - name: web
    containers: [nginx]
    public_ingress: [80]
    connections:
      - to: db
        ports: 5432
  - name: db
    containers: [postgres]
    annotations: [stateful]
    placements:
      - exclusive: true
        label: web
invariants:
  - form: reach
    nodes: [web, db]
  - form: reach
    nodes: [public, db]
    target: false
"#;

/// Three independent problems: an undeployed connection target, an
/// undeployed placement label, and a floating IP on a public multi-container service
pub const BROKEN: &str = r#"
deploy = ["web", "lb"]

[[containers]]
key = "app"
image = "app"
replicas = 2

[[services]]
name = "web"
containers = ["app"]
connections = [{ to = "cache", ports = 6379 }]

[[services.placements]]
label = "cache"

[[services]]
name = "lb"
containers = ["app"]
public_ingress = [443]

[[services.placements]]
floating_ip = "1.2.3.4"

[[services]]
name = "cache"
"#;
