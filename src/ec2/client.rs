// Implement the EC2 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_ec2::client::Client as Ec2Client;
use aws_types::SdkConfig;
use crate::common::Region;
use tracing::debug;

// Tag that holds the display name of a VPC.
const NAME_TAG: &str = "Name";

/// An EC2 `Client`, only used to look up VPC names.
pub struct Client {
    /// The AWS SDK `Ec2Client`.
    pub client: Ec2Client,

    /// `Region` that VPCs are listed in.
    pub region: Region,
}

impl Client {
    /// Return a new EC2 `Client` from an already loaded `SdkConfig`.
    pub fn new(config: &SdkConfig, region: Region) -> Self {
        debug!("new: Creating Ec2Client in region '{}'", region.name());

        let client = Ec2Client::new(config);

        Self {
            client,
            region,
        }
    }

    /// Returns the `Name` tag of every VPC in the region.
    ///
    /// VPCs without a `Name` tag are left out.
    pub async fn list_vpc_names(&self) -> Result<Vec<String>> {
        debug!("list_vpc_names: Listing in '{}'", self.region.name());

        let mut names      = Vec::new();
        let mut next_token = None;

        loop {
            let output = self.client.describe_vpcs()
                .set_next_token(next_token)
                .send()
                .await?;

            if let Some(vpcs) = output.vpcs() {
                for vpc in vpcs {
                    let name = vpc.tags()
                        .unwrap_or_default()
                        .iter()
                        .find(|tag| tag.key() == Some(NAME_TAG))
                        .and_then(|tag| tag.value());

                    debug!("list_vpc_names: {:?} -> {:?}", vpc.vpc_id(), name);

                    if let Some(name) = name {
                        names.push(name.to_string());
                    }
                }
            }

            match output.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None        => break,
            }
        }

        Ok(names)
    }
}
