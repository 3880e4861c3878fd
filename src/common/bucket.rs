// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;

/// Represents an S3 bucket selected for removal.
///
/// This will always have a `name`. The `Region` is only known once the
/// bucket location has been looked up.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub name:   String,
    pub region: Option<Region>,
}

impl Bucket {
    /// Returns a `Bucket` with no region resolved yet.
    pub fn new(name: &str) -> Self {
        Self {
            name:   name.into(),
            region: None,
        }
    }

    /// Returns the `Bucket` with its resolved `region` attached.
    pub fn in_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}
