// Connect trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    BucketStore,
    NetworkNames,
    Region,
};

/// The clients needed to work on buckets within one region.
pub struct Session<S, N> {
    /// Client for the S3 calls.
    pub store: S,

    /// Client for the VPC name lookups.
    pub networks: N,

    /// `Region` that both clients were created in.
    pub region: Region,
}

/// `Connect` creates a new `Session` scoped to a region.
///
/// A fresh `Session` is created for every bucket once its real region is
/// known, sessions are never pooled.
#[async_trait]
pub trait Connect {
    /// Client type used for S3.
    type Store: BucketStore + Send + Sync;

    /// Client type used for VPC lookups.
    type Networks: NetworkNames + Send + Sync;

    /// Returns a `Session` whose clients talk to `region`.
    async fn connect(&self, region: &Region)
        -> Result<Session<Self::Store, Self::Networks>>;
}
