// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Implementation of the `BucketStore` trait for our S3 `Client`.
mod bucket_store;

/// S3 `Client`.
mod client;

pub use client::*;
