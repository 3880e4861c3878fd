// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Result,
};
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::types::{
    Delete,
    ObjectIdentifier,
};
use aws_types::SdkConfig;
use crate::common::{
    BucketNames,
    DeleteFailure,
    ObjectVersion,
    ObjectVersions,
    Region,
};
use std::time::Duration;
use tracing::debug;

/// How often `HeadBucket` is tried while waiting for a bucket to disappear.
const WAIT_ATTEMPTS: u32 = 20;

/// Delay between `HeadBucket` attempts.
const WAIT_DELAY: Duration = Duration::from_secs(5);

/// Bounds for `Client::wait_until_bucket_absent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waiter {
    pub attempts: u32,
    pub delay:    Duration,
}

impl Default for Waiter {
    fn default() -> Self {
        Self {
            attempts: WAIT_ATTEMPTS,
            delay:    WAIT_DELAY,
        }
    }
}

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// `Region` that the client was created in.
    pub region: Region,

    /// Bounds for waiting on bucket deletion.
    pub waiter: Waiter,
}

impl Client {
    /// Return a new S3 `Client` from an already loaded `SdkConfig`.
    pub fn new(config: &SdkConfig, region: Region) -> Self {
        debug!("new: Creating S3Client in region '{}'", region.name());

        let client = S3Client::new(config);

        Self {
            client: client,
            region: region,
            waiter: Waiter::default(),
        }
    }

    /// Returns a list of bucket names.
    pub async fn list_buckets(&self) -> Result<BucketNames> {
        let output = self.client.list_buckets()
            .send()
            .await?;

        let bucket_names = match output.buckets() {
            Some(buckets) => {
                buckets.iter()
                    .filter_map(|b| b.name().map(String::from))
                    .collect()
            },
            None => Vec::new(),
        };

        Ok(bucket_names)
    }

    /// Return the bucket location (`Region`) for the given `bucket`.
    ///
    /// This method will properly handle the case of the `null` (empty) and
    /// `EU` location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(&self, bucket: &str) -> Result<Region> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await?;

        let location = output.location_constraint()
            .map(|l| l.as_str());

        debug!("GetBucketLocation API returned '{:?}'", location);

        Ok(Region::from_location_constraint(location))
    }

    /// Returns a `bool` indicating if `bucket` still exists.
    ///
    /// A 404 from `HeadBucket` means the bucket is gone, any other error is
    /// returned to the caller.
    pub async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        debug!("bucket_exists for '{}'", bucket);

        let output = self.client.head_bucket()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(_)    => Ok(true),
            Err(err) => {
                let status = err.raw_response()
                    .map(|r| r.http().status().as_u16());

                debug!("head_bucket status for '{}' -> {:?}", bucket, status);

                match status {
                    Some(404) => Ok(false),
                    _         => Err(err.into()),
                }
            },
        }
    }

    /// Polls `bucket_exists` until the bucket is gone, up to the bounds in
    /// `self.waiter`.
    pub async fn wait_until_bucket_absent(&self, bucket: &str) -> Result<()> {
        for attempt in 1..=self.waiter.attempts {
            debug!(
                "wait_until_bucket_absent: '{}' attempt {}/{}",
                bucket,
                attempt,
                self.waiter.attempts,
            );

            if !self.bucket_exists(bucket).await? {
                return Ok(());
            }

            if attempt < self.waiter.attempts {
                tokio::time::sleep(self.waiter.delay).await;
            }
        }

        bail!(
            "bucket still exists after {} attempts",
            self.waiter.attempts,
        )
    }

    /// Return the keys of all current objects in the bucket.
    pub async fn list_current_objects(&self, bucket: &str)
        -> Result<Vec<String>>
    {
        debug!("list_current_objects for '{}'", bucket);

        let mut continuation_token = None;
        let mut keys               = Vec::new();

        // Loop until all objects are processed.
        loop {
            let output = self.client.list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation_token)
                .send()
                .await?;

            if let Some(contents) = output.contents() {
                keys.extend(
                    contents.iter()
                        .filter_map(|o| o.key().map(String::from))
                );
            }

            // If the output was truncated we should have a
            // next_continuation_token, otherwise we're done.
            if !output.is_truncated() {
                break;
            }

            continuation_token = output.next_continuation_token()
                .map(String::from);
        }

        Ok(keys)
    }

    /// List all object versions and delete markers in the bucket.
    pub async fn list_all_object_versions(&self, bucket: &str)
        -> Result<ObjectVersions>
    {
        debug!("list_all_object_versions for '{}'", bucket);

        let mut next_key_marker        = None;
        let mut next_version_id_marker = None;
        let mut object_versions        = ObjectVersions::default();

        // Loop until all object versions are processed
        loop {
            let output = self.client.list_object_versions()
                .bucket(bucket)
                .set_key_marker(next_key_marker)
                .set_version_id_marker(next_version_id_marker)
                .send()
                .await?;

            if let Some(versions) = output.versions() {
                object_versions.versions.extend(
                    versions.iter()
                        .filter_map(|v| {
                            v.key().map(|key| ObjectVersion::new(key, v.version_id()))
                        })
                );
            }

            if let Some(markers) = output.delete_markers() {
                object_versions.delete_markers.extend(
                    markers.iter()
                        .filter_map(|m| {
                            m.key().map(|key| ObjectVersion::new(key, m.version_id()))
                        })
                );
            }

            // Store the continuation markers for the next loop if the output
            // was truncated.
            if !output.is_truncated() {
                break;
            }

            next_key_marker        = output.next_key_marker().map(String::from);
            next_version_id_marker = output.next_version_id_marker()
                .map(String::from);
        }

        Ok(object_versions)
    }

    /// Delete a batch of objects, versions or delete markers with a single
    /// `DeleteObjects` request.
    ///
    /// The request runs in quiet mode, so only the entries S3 failed to
    /// delete come back. Callers must keep batches within
    /// `MAX_DELETE_BATCH`.
    pub async fn delete_objects(
        &self,
        bucket: &str,
        objects: &[ObjectVersion],
    ) -> Result<Vec<DeleteFailure>> {
        debug!(
            "delete_objects: {} objects from '{}' in '{}'",
            objects.len(),
            bucket,
            self.region.name(),
        );

        let identifiers = objects.iter()
            .map(|o| {
                ObjectIdentifier::builder()
                    .key(&o.key)
                    .set_version_id(o.version_id.clone())
                    .build()
            })
            .collect();

        let delete = Delete::builder()
            .set_objects(Some(identifiers))
            .quiet(true)
            .build();

        let output = self.client.delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await?;

        let failures = match output.errors() {
            Some(errors) => {
                errors.iter()
                    .map(|e| DeleteFailure {
                        key:    e.key().unwrap_or_default().to_string(),
                        reason: format!(
                            "{}: {}",
                            e.code().unwrap_or("Unknown"),
                            e.message().unwrap_or_default(),
                        ),
                    })
                    .collect()
            },
            None => Vec::new(),
        };

        debug!("delete_objects: {} failures", failures.len());

        Ok(failures)
    }

    /// Delete the bucket itself. The bucket must already be empty.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        debug!("delete_bucket: '{}' in '{}'", bucket, self.region.name());

        self.client.delete_bucket()
            .bucket(bucket)
            .send()
            .await?;

        Ok(())
    }
}
