// Empties and deletes a single bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::anyhow;
use crate::common::{
    Bucket,
    BucketStore,
    ClientConfig,
    Error,
    ObjectVersion,
    MAX_DELETE_BATCH,
};
use tracing::{
    debug,
    info,
};

/// What happened to a bucket that reached the destroyer.
#[derive(Debug, Eq, PartialEq)]
pub enum Destroyed {
    /// The bucket was emptied of `objects` entries and deleted.
    Removed {
        objects: usize,
    },

    /// Dry-run, nothing was touched.
    DryRun,
}

// Deletes `objects` in batches of at most MAX_DELETE_BATCH. The first entry
// the store reports as not deleted ends the run.
async fn delete_in_batches<S>(
    bucket: &str,
    objects: &[ObjectVersion],
    store: &S,
) -> Result<(), Error>
where
    S: BucketStore + ?Sized,
{
    for batch in objects.chunks(MAX_DELETE_BATCH) {
        debug!("delete_in_batches: {} objects from '{}'", batch.len(), bucket);

        let failures = store.delete_objects(bucket, batch)
            .await
            .map_err(|source| Error::DeleteObjects {
                bucket: bucket.into(),
                source: source,
            })?;

        if let Some(failure) = failures.into_iter().next() {
            return Err(Error::DeleteObject {
                bucket: bucket.into(),
                key:    failure.key,
                source: anyhow!(failure.reason),
            });
        }
    }

    Ok(())
}

/// Deletes every current object, then every object version and delete
/// marker, so that the bucket is empty even when versioning is or was
/// enabled.
///
/// Returns how many entries were deleted.
pub async fn empty<S>(bucket: &str, store: &S) -> Result<usize, Error>
where
    S: BucketStore + ?Sized,
{
    info!("Attempting to empty: {}", bucket);

    let keys: Vec<ObjectVersion> = store.list_objects(bucket)
        .await
        .map_err(|source| Error::ListObjects {
            bucket: bucket.into(),
            source: source,
        })?
        .iter()
        .map(|key| ObjectVersion::new(key, None))
        .collect();

    debug!("empty: {} current objects in '{}'", keys.len(), bucket);

    delete_in_batches(bucket, &keys, store).await?;

    // Listed after the current objects are gone, so this also picks up the
    // delete markers those deletions left behind.
    let versions = store.list_object_versions(bucket)
        .await
        .map_err(|source| Error::ListObjectVersions {
            bucket: bucket.into(),
            source: source,
        })?;

    debug!(
        "empty: {} versions and {} delete markers in '{}'",
        versions.versions.len(),
        versions.delete_markers.len(),
        bucket,
    );

    let versions: Vec<ObjectVersion> = versions.iter().cloned().collect();

    delete_in_batches(bucket, &versions, store).await?;

    let deleted = keys.len() + versions.len();

    println!("🪣 Deleted {} object(s) from bucket: {}", deleted, bucket);

    Ok(deleted)
}

/// Deletes the (empty) bucket and waits until it is gone.
pub async fn delete<S>(bucket: &str, store: &S) -> Result<(), Error>
where
    S: BucketStore + ?Sized,
{
    info!("Attempting to delete: {}", bucket);

    store.delete_bucket(bucket)
        .await
        .map_err(|source| Error::DeleteBucket {
            bucket: bucket.into(),
            source: source,
        })?;

    println!("🪣 Waiting for bucket {:?} to be deleted...", bucket);

    store.wait_until_bucket_absent(bucket)
        .await
        .map_err(|source| Error::WaitForDeletion {
            bucket: bucket.into(),
            source: source,
        })?;

    println!("🪣 Deleted bucket {:?}", bucket);

    Ok(())
}

/// Empties and deletes `bucket`, or only reports doing so in dry-run mode.
pub async fn destroy<S>(
    config: &ClientConfig,
    bucket: &Bucket,
    store: &S,
) -> Result<Destroyed, Error>
where
    S: BucketStore + ?Sized,
{
    if config.dry_run {
        println!("😴 Dry Run: Would have attempted to empty: {}", bucket.name);
        println!("😴 Dry Run: Would have attempted to delete: {}", bucket.name);

        return Ok(Destroyed::DryRun);
    }

    let objects = empty(&bucket.name, store).await?;
    delete(&bucket.name, store).await?;

    Ok(Destroyed::Removed {
        objects,
    })
}
