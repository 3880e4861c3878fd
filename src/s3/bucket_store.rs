// Implement the BucketStore trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    BucketNames,
    BucketStore,
    DeleteFailure,
    ObjectVersion,
    ObjectVersions,
    Region,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketStore for Client {
    /// Return all bucket names visible to our credentials.
    ///
    /// ListBuckets is global, so this is not filtered by the client's
    /// `Region`.
    async fn list_buckets(&self) -> Result<BucketNames> {
        debug!("list_buckets: Listing...");

        let bucket_names = Client::list_buckets(self).await?;

        debug!("list_buckets: Found {} buckets", bucket_names.len());

        Ok(bucket_names)
    }

    async fn bucket_region(&self, bucket: &str) -> Result<Region> {
        self.get_bucket_location(bucket).await
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>> {
        self.list_current_objects(bucket).await
    }

    async fn list_object_versions(&self, bucket: &str)
        -> Result<ObjectVersions>
    {
        self.list_all_object_versions(bucket).await
    }

    async fn delete_objects(&self, bucket: &str, objects: &[ObjectVersion])
        -> Result<Vec<DeleteFailure>>
    {
        Client::delete_objects(self, bucket, objects).await
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        Client::delete_bucket(self, bucket).await
    }

    async fn wait_until_bucket_absent(&self, bucket: &str) -> Result<()> {
        debug!("wait_until_bucket_absent: Waiting for '{}'", bucket);

        Client::wait_until_bucket_absent(self, bucket).await
    }
}
