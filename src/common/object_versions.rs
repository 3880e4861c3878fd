// Object versions listed from versioned buckets
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A single object version, or a delete marker, within a bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectVersion {
    pub key:        String,
    pub version_id: Option<String>,
}

impl ObjectVersion {
    pub fn new(key: &str, version_id: Option<&str>) -> Self {
        Self {
            key:        key.into(),
            version_id: version_id.map(Into::into),
        }
    }
}

/// Everything `ListObjectVersions` returned for a bucket.
///
/// Both lists must be deleted before a versioned bucket is truly empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectVersions {
    pub versions:       Vec<ObjectVersion>,
    pub delete_markers: Vec<ObjectVersion>,
}

impl ObjectVersions {
    /// Returns `true` if there are neither versions nor delete markers.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty() && self.delete_markers.is_empty()
    }

    /// Iterates versions first, then delete markers.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectVersion> {
        self.versions.iter().chain(self.delete_markers.iter())
    }
}

/// An entry that a batch delete reported as not deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteFailure {
    pub key:    String,
    pub reason: String,
}
