// NetworkNames trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;

/// Suffix that VPC names commonly carry and that is stripped before they are
/// compared against bucket names.
pub const NETWORK_NAME_SUFFIX: &str = "-vpc";

/// `NetworkNames` lists the display names of the live networks in the region
/// the implementing `Client` was created in.
#[async_trait]
pub trait NetworkNames {
    /// Returns the raw network names, suffix included.
    async fn list_network_names(&self) -> Result<Vec<String>>;
}

/// Returns `name` with a single trailing `NETWORK_NAME_SUFFIX` removed.
pub fn strip_network_suffix(name: &str) -> &str {
    name.strip_suffix(NETWORK_NAME_SUFFIX).unwrap_or(name)
}
