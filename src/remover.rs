// The bucket removal pipeline
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Asks for approval before anything is removed.
mod gate;

/// Empties and deletes buckets.
mod destroyer;

/// Finds the buckets to remove.
mod matcher;

/// Drives the stages for one run.
mod pipeline;

/// Refuses buckets that share a name with a live VPC.
mod safety;

#[cfg(test)]
mod fake;

pub use pipeline::*;
