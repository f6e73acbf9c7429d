//! Label helpers
//!
//! A label is the unique name of a service. Labels double as DNS-style
//! hostnames inside the cluster.

/// Reserved label for traffic to and from the open internet.
pub const PUBLIC_INTERNET_LABEL: &str = "public";

const HOSTNAME_SUFFIX: &str = ".q";

/// Hostname addressing a whole service: `<label>.q`
pub fn hostname(label: &str) -> String {
    format!("{}{}", label, HOSTNAME_SUFFIX)
}

/// Hostname of the `index`-th container (1-based) of a service: `<index>.<label>.q`
pub fn child_hostname(index: usize, label: &str) -> String {
    format!("{}.{}{}", index, label, HOSTNAME_SUFFIX)
}
