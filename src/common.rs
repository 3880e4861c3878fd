// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_store;
mod client_config;
mod confirm;
mod connect;
mod error;
mod network_names;
mod object_versions;
mod region;

pub use bucket::*;
pub use bucket_store::*;
pub use client_config::*;
pub use confirm::*;
pub use connect::*;
pub use error::*;
pub use network_names::*;
pub use object_versions::*;
pub use region::*;

// Bucket names as returned by ListBuckets, in provider order.
pub type BucketNames = Vec<String>;
