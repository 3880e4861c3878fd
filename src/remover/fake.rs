// In-memory stand-ins for AWS, used by the pipeline tests
use anyhow::{
    anyhow,
    bail,
    Result,
};
use async_trait::async_trait;
use crate::common::{
    BucketNames,
    BucketStore,
    Confirm,
    Connect,
    DeleteFailure,
    NetworkNames,
    ObjectVersion,
    ObjectVersions,
    Region,
    Session,
};
use std::collections::HashMap;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Mutex,
};

/// A remote call made against the `FakeCloud`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Connect(String),
    ListBuckets,
    BucketRegion(String),
    ListObjects(String),
    ListObjectVersions(String),
    DeleteObjects {
        bucket:  String,
        objects: Vec<ObjectVersion>,
    },
    DeleteBucket(String),
    WaitUntilAbsent(String),
    ListNetworks(String),
}

impl Call {
    fn is_mutation(&self) -> bool {
        matches!(self, Self::DeleteObjects { .. } | Self::DeleteBucket(_))
    }
}

#[derive(Clone, Debug)]
pub struct FakeBucket {
    name:           String,
    region:         String,
    versioned:      bool,
    objects:        Vec<String>,
    versions:       Vec<ObjectVersion>,
    delete_markers: Vec<ObjectVersion>,
}

impl FakeBucket {
    pub fn new(name: &str, region: &str) -> Self {
        Self {
            name:           name.into(),
            region:         region.into(),
            versioned:      false,
            objects:        Vec::new(),
            versions:       Vec::new(),
            delete_markers: Vec::new(),
        }
    }

    pub fn with_objects(mut self, keys: &[&str]) -> Self {
        self.objects.extend(keys.iter().map(|k| k.to_string()));
        self
    }

    /// Marks the bucket as versioned and adds non-current versions.
    pub fn with_versions(mut self, versions: &[(&str, &str)]) -> Self {
        self.versioned = true;
        self.versions.extend(
            versions.iter().map(|(k, v)| ObjectVersion::new(k, Some(*v)))
        );
        self
    }

    pub fn with_delete_markers(mut self, markers: &[(&str, &str)]) -> Self {
        self.versioned = true;
        self.delete_markers.extend(
            markers.iter().map(|(k, v)| ObjectVersion::new(k, Some(*v)))
        );
        self
    }
}

#[derive(Debug, Default)]
struct State {
    buckets:              Vec<FakeBucket>,
    networks:             HashMap<String, Vec<String>>,
    calls:                Vec<Call>,
    fail_list_buckets:    bool,
    fail_delete_object:   Option<String>,
    fail_delete_requests: bool,
    fail_delete_bucket:   Option<String>,
    never_absent:         bool,
}

impl State {
    fn bucket_mut(&mut self, name: &str, scope: &Option<String>)
        -> Result<&mut FakeBucket>
    {
        let bucket = self.buckets.iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| anyhow!("NoSuchBucket: {}", name))?;

        // S3 refuses bucket level calls made through another region.
        if let Some(scope) = scope {
            if *scope != bucket.region {
                bail!(
                    "PermanentRedirect: {} is in {}, not {}",
                    name,
                    bucket.region,
                    scope,
                );
            }
        }

        Ok(bucket)
    }
}

/// An in-memory account with buckets and VPCs spread over regions.
///
/// Every handle returned by `connect` shares the same state but is scoped to
/// the region it was connected to.
#[derive(Clone, Debug, Default)]
pub struct FakeCloud {
    state: Arc<Mutex<State>>,
    scope: Option<String>,
}

impl FakeCloud {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: Call) {
        self.lock().calls.push(call);
    }

    pub fn with_bucket(self, bucket: FakeBucket) -> Self {
        self.lock().buckets.push(bucket);
        self
    }

    pub fn with_networks(self, region: &str, names: &[&str]) -> Self {
        self.lock().networks.insert(
            region.into(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn failing_list_buckets(self) -> Self {
        self.lock().fail_list_buckets = true;
        self
    }

    pub fn failing_delete_object(self, key: &str) -> Self {
        self.lock().fail_delete_object = Some(key.into());
        self
    }

    /// Every batch delete request fails as a whole.
    pub fn failing_delete_requests(self) -> Self {
        self.lock().fail_delete_requests = true;
        self
    }

    pub fn failing_delete_bucket(self, bucket: &str) -> Self {
        self.lock().fail_delete_bucket = Some(bucket.into());
        self
    }

    /// Deleted buckets stay visible forever.
    pub fn never_absent(self) -> Self {
        self.lock().never_absent = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter()
            .filter(Call::is_mutation)
            .collect()
    }

    pub fn connects(&self) -> Vec<String> {
        self.calls().into_iter()
            .filter_map(|call| match call {
                Call::Connect(region) => Some(region),
                _                     => None,
            })
            .collect()
    }

    pub fn has_bucket(&self, name: &str) -> bool {
        self.lock().buckets.iter().any(|b| b.name == name)
    }

    pub fn list_objects_now(&self, name: &str) -> Vec<String> {
        self.lock().buckets.iter()
            .find(|b| b.name == name)
            .map(|b| b.objects.clone())
            .unwrap_or_default()
    }

    pub fn list_object_versions_now(&self, name: &str) -> ObjectVersions {
        self.lock().buckets.iter()
            .find(|b| b.name == name)
            .map(|b| ObjectVersions {
                versions:       b.versions.clone(),
                delete_markers: b.delete_markers.clone(),
            })
            .unwrap_or_default()
    }

    fn scoped(&self, region: &Region) -> Self {
        Self {
            state: Arc::clone(&self.state),
            scope: Some(region.name().into()),
        }
    }
}

#[async_trait]
impl Connect for FakeCloud {
    type Store    = FakeCloud;
    type Networks = FakeCloud;

    async fn connect(&self, region: &Region)
        -> Result<Session<Self::Store, Self::Networks>>
    {
        self.record(Call::Connect(region.name().into()));

        Ok(Session {
            store:    self.scoped(region),
            networks: self.scoped(region),
            region:   region.clone(),
        })
    }
}

#[async_trait]
impl BucketStore for FakeCloud {
    async fn list_buckets(&self) -> Result<BucketNames> {
        self.record(Call::ListBuckets);

        let state = self.lock();
        if state.fail_list_buckets {
            bail!("AccessDenied");
        }

        Ok(state.buckets.iter().map(|b| b.name.clone()).collect())
    }

    async fn bucket_region(&self, bucket: &str) -> Result<Region> {
        self.record(Call::BucketRegion(bucket.into()));

        let mut state = self.lock();
        let bucket    = state.bucket_mut(bucket, &None)?;

        Ok(Region::default().set_region(&bucket.region))
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>> {
        self.record(Call::ListObjects(bucket.into()));

        let mut state = self.lock();
        let bucket    = state.bucket_mut(bucket, &self.scope)?;

        Ok(bucket.objects.clone())
    }

    async fn list_object_versions(&self, bucket: &str)
        -> Result<ObjectVersions>
    {
        self.record(Call::ListObjectVersions(bucket.into()));

        let mut state = self.lock();
        let bucket    = state.bucket_mut(bucket, &self.scope)?;

        Ok(ObjectVersions {
            versions:       bucket.versions.clone(),
            delete_markers: bucket.delete_markers.clone(),
        })
    }

    async fn delete_objects(&self, bucket: &str, objects: &[ObjectVersion])
        -> Result<Vec<DeleteFailure>>
    {
        self.record(Call::DeleteObjects {
            bucket:  bucket.into(),
            objects: objects.to_vec(),
        });

        let mut state = self.lock();
        if state.fail_delete_requests {
            bail!("SlowDown: {}", bucket);
        }

        let fail_key = state.fail_delete_object.clone();
        let bucket   = state.bucket_mut(bucket, &self.scope)?;

        let mut failures = Vec::new();

        for object in objects {
            if fail_key.as_deref() == Some(object.key.as_str()) {
                failures.push(DeleteFailure {
                    key:    object.key.clone(),
                    reason: "AccessDenied: Access Denied".into(),
                });
                continue;
            }

            match &object.version_id {
                None => {
                    bucket.objects.retain(|k| *k != object.key);

                    // Deleting the current object of a versioned bucket only
                    // hides it behind a delete marker.
                    if bucket.versioned {
                        let marker = format!("marker-{}", object.key);
                        bucket.delete_markers.push(
                            ObjectVersion::new(&object.key, Some(&marker))
                        );
                    }
                },
                Some(_) => {
                    bucket.versions.retain(|v| v != object);
                    bucket.delete_markers.retain(|m| m != object);
                },
            }
        }

        Ok(failures)
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.record(Call::DeleteBucket(bucket.into()));

        let mut state = self.lock();
        if state.fail_delete_bucket.as_deref() == Some(bucket) {
            bail!("InternalError: {}", bucket);
        }

        let found = state.bucket_mut(bucket, &self.scope)?;
        let empty = found.objects.is_empty()
            && found.versions.is_empty()
            && found.delete_markers.is_empty();

        if !empty {
            bail!("BucketNotEmpty: {}", bucket);
        }

        if !state.never_absent {
            state.buckets.retain(|b| b.name != bucket);
        }

        Ok(())
    }

    async fn wait_until_bucket_absent(&self, bucket: &str) -> Result<()> {
        self.record(Call::WaitUntilAbsent(bucket.into()));

        if self.has_bucket(bucket) {
            bail!("bucket still exists after 20 attempts");
        }

        Ok(())
    }
}

#[async_trait]
impl NetworkNames for FakeCloud {
    async fn list_network_names(&self) -> Result<Vec<String>> {
        let region = self.scope.clone().unwrap_or_default();

        self.record(Call::ListNetworks(region.clone()));

        let names = self.lock().networks
            .get(&region)
            .cloned()
            .unwrap_or_default();

        Ok(names)
    }
}

/// Fixed list of network names, or a listing that always fails.
pub struct FakeNetworks {
    names: Option<Vec<String>>,
}

impl FakeNetworks {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: Some(names.iter().map(|n| n.to_string()).collect()),
        }
    }

    pub fn failing() -> Self {
        Self {
            names: None,
        }
    }
}

#[async_trait]
impl NetworkNames for FakeNetworks {
    async fn list_network_names(&self) -> Result<Vec<String>> {
        self.names.clone()
            .ok_or_else(|| anyhow!("UnauthorizedOperation"))
    }
}

/// Prompt with a canned answer that counts how often it was asked.
pub struct FakeConfirm {
    answer: Option<bool>,
    asked:  AtomicUsize,
}

impl FakeConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            asked:  AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            asked:  AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirm for FakeConfirm {
    fn confirm(&self, _label: &str) -> Result<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);

        self.answer.ok_or_else(|| anyhow!("not a terminal"))
    }
}
