// Errors that end a run
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Every way a run can fail.
///
/// The collaborator traits return `anyhow::Error`, which is kept as the
/// `source` so the provider's own message reaches the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration was rejected before any AWS call was made.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A client for `region` couldn't be created.
    #[error("Unable to create session to AWS in region {region}")]
    Connect {
        region: String,
        source: anyhow::Error,
    },

    /// ListBuckets failed.
    #[error("Unable to list buckets")]
    ListBuckets(#[source] anyhow::Error),

    /// The location of `bucket` couldn't be found.
    #[error("Unable to get bucket region for {bucket:?}")]
    BucketRegion {
        bucket: String,
        source: anyhow::Error,
    },

    /// VPCs in `region` couldn't be listed for the safety check.
    #[error("Unable to list VPCs in region {region}")]
    ListNetworks {
        region: String,
        source: anyhow::Error,
    },

    /// The confirmation prompt couldn't be shown or read.
    #[error("Prompt failed")]
    Prompt(#[source] anyhow::Error),

    /// Objects in `bucket` couldn't be listed.
    #[error("Unable to list objects in bucket {bucket:?}")]
    ListObjects {
        bucket: String,
        source: anyhow::Error,
    },

    /// Object versions in `bucket` couldn't be listed.
    #[error("Unable to list object versions in bucket {bucket:?}")]
    ListObjectVersions {
        bucket: String,
        source: anyhow::Error,
    },

    /// A batch delete request for `bucket` failed as a whole.
    #[error("Unable to delete objects from bucket {bucket:?}")]
    DeleteObjects {
        bucket: String,
        source: anyhow::Error,
    },

    /// An object, version or delete marker couldn't be deleted.
    #[error("Unable to delete object {key:?} from bucket {bucket:?}")]
    DeleteObject {
        bucket: String,
        key:    String,
        source: anyhow::Error,
    },

    /// The bucket delete request failed.
    #[error("Unable to delete bucket {bucket:?}")]
    DeleteBucket {
        bucket: String,
        source: anyhow::Error,
    },

    /// The bucket was not confirmed gone within the bounded wait.
    #[error("Unable to confirm bucket {bucket:?} was deleted")]
    WaitForDeletion {
        bucket: String,
        source: anyhow::Error,
    },
}
