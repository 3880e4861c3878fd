// Creates AWS sessions for a region
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use crate::common::{
    Connect,
    Region,
    Session,
};
use crate::ec2;
use crate::s3;
use tracing::debug;

/// `Connect` implementation that talks to real AWS.
#[derive(Debug, Default)]
pub struct AwsConnector {
    /// Named profile from the shared config files, if any.
    pub profile: Option<String>,
}

impl AwsConnector {
    pub fn new(profile: Option<String>) -> Self {
        Self {
            profile,
        }
    }
}

#[async_trait]
impl Connect for AwsConnector {
    type Store    = s3::Client;
    type Networks = ec2::Client;

    /// Load a fresh `SdkConfig` for `region` and build both clients from it.
    async fn connect(&self, region: &Region)
        -> Result<Session<Self::Store, Self::Networks>>
    {
        debug!(
            "connect: Loading AWS config for region '{}' with profile {:?}",
            region.name(),
            self.profile,
        );

        let loader = aws_config::from_env()
            .region(region.clone());

        // Without a profile the default credential chain is used.
        let loader = match &self.profile {
            Some(profile) => {
                let credentials = ProfileFileCredentialsProvider::builder()
                    .profile_name(profile)
                    .build();

                loader.credentials_provider(credentials)
            },
            None => loader,
        };

        let config = loader.load().await;

        Ok(Session {
            store:    s3::Client::new(&config, region.clone()),
            networks: ec2::Client::new(&config, region.clone()),
            region:   region.clone(),
        })
    }
}
