// VPC name collision check
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    strip_network_suffix,
    ClientConfig,
    Error,
    NetworkNames,
    Region,
};
use tracing::{
    debug,
    info,
};

/// Result of the safety check for one bucket.
#[derive(Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Nothing stands in the way of removing the bucket.
    Clear,

    /// The bucket name contains the name of this live network.
    Collision(String),
}

/// Returns the first stripped network name that is a substring of `bucket`.
///
/// Names that are empty after stripping are ignored, they would otherwise
/// collide with every bucket.
pub fn find_collision(bucket: &str, network_names: &[String]) -> Option<String> {
    network_names.iter()
        .map(|name| strip_network_suffix(name))
        .filter(|name| !name.is_empty())
        .find(|name| bucket.contains(*name))
        .map(String::from)
}

/// Checks `bucket` against the live networks in `region`.
///
/// The networks aren't listed at all when the check is skipped.
pub async fn check<N>(
    config: &ClientConfig,
    bucket: &str,
    region: &Region,
    networks: &N,
) -> Result<Verdict, Error>
where
    N: NetworkNames + ?Sized,
{
    if config.skip_safety_check {
        info!("Skipping VPC safety check for {:?}", bucket);

        return Ok(Verdict::Clear);
    }

    let network_names = networks.list_network_names()
        .await
        .map_err(|source| Error::ListNetworks {
            region: region.name().into(),
            source: source,
        })?;

    debug!("VPCs in '{}': {:?}", region.name(), network_names);

    let verdict = match find_collision(bucket, &network_names) {
        Some(network) => Verdict::Collision(network),
        None          => Verdict::Clear,
    };

    Ok(verdict)
}
