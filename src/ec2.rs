// Imports all of the components needed for ec2::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// EC2 `Client`.
mod client;

/// Implementation of the `NetworkNames` trait for our EC2 `Client`.
mod network_names;

pub use client::*;
