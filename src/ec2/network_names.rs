// Implement the NetworkNames trait for the ec2::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::NetworkNames;
use super::client::Client;

#[async_trait]
impl NetworkNames for Client {
    /// Return the VPC names in the client's `Region`.
    async fn list_network_names(&self) -> Result<Vec<String>> {
        self.list_vpc_names().await
    }
}
