// BucketStore trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    BucketNames,
    DeleteFailure,
    ObjectVersion,
    ObjectVersions,
    Region,
};

/// Most entries a single `delete_objects` call may carry. S3 rejects larger
/// `DeleteObjects` requests.
pub const MAX_DELETE_BATCH: usize = 1000;

/// `BucketStore` represents the required methods to find S3 buckets, empty
/// them and remove them.
///
/// This trait should be implemented by all `Client`s performing these tasks.
#[async_trait]
pub trait BucketStore {
    /// Returns a list of bucket names, in the order the provider returned
    /// them.
    async fn list_buckets(&self) -> Result<BucketNames>;

    /// Returns the `Region` that `bucket` actually lives in.
    async fn bucket_region(&self, bucket: &str) -> Result<Region>;

    /// Returns the keys of all current objects in `bucket`.
    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>>;

    /// Returns all object versions and delete markers in `bucket`.
    async fn list_object_versions(&self, bucket: &str)
        -> Result<ObjectVersions>;

    /// Deletes every entry of `objects` from `bucket` in a single request.
    /// Entries without a `version_id` delete the current object.
    ///
    /// Returns the entries the provider reported as not deleted.
    async fn delete_objects(&self, bucket: &str, objects: &[ObjectVersion])
        -> Result<Vec<DeleteFailure>>;

    /// Issues the delete request for an empty `bucket`.
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// Blocks until `bucket` is no longer visible, or errors once the bounded
    /// wait is exhausted.
    async fn wait_until_bucket_absent(&self, bucket: &str) -> Result<()>;
}
