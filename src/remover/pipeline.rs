// Runs match, confirm, safety check and destroy for one invocation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Bucket,
    BucketStore,
    ClientConfig,
    Confirm,
    Connect,
    Error,
    Region,
    Session,
};
use super::destroyer::{
    self,
    Destroyed,
};
use super::gate;
use super::matcher::matching_buckets;
use super::safety::{
    self,
    Verdict,
};
use tracing::{
    debug,
    info,
};

/// What happened to one approved bucket.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Emptied of `objects` entries and deleted.
    Removed {
        objects: usize,
    },

    /// Would have been removed, but this is a dry-run.
    DryRun,

    /// Left alone because its name contains the live VPC name `network`.
    Skipped {
        network: String,
    },
}

impl From<Destroyed> for Outcome {
    fn from(destroyed: Destroyed) -> Self {
        match destroyed {
            Destroyed::Removed { objects } => Self::Removed { objects },
            Destroyed::DryRun              => Self::DryRun,
        }
    }
}

/// How a run that didn't fail ended.
#[derive(Debug, PartialEq)]
pub enum Summary {
    /// No bucket matched the search term.
    NoMatches,

    /// The user declined, nothing was touched.
    Declined,

    /// Every approved bucket, in order, with what happened to it.
    Processed(Vec<(Bucket, Outcome)>),
}

// Connect, keeping the region in the error.
async fn connect<C>(connector: &C, region: &Region)
    -> Result<Session<C::Store, C::Networks>, Error>
where
    C: Connect + ?Sized,
{
    connector.connect(region)
        .await
        .map_err(|source| Error::Connect {
            region: region.name().into(),
            source: source,
        })
}

/// Runs the whole removal pipeline.
///
/// Buckets are handled one at a time. Each one gets its region looked up,
/// a session in that region, the VPC safety check and finally the
/// destroyer. A safety collision skips just that bucket; any error ends the
/// run.
pub async fn run<C, P>(
    config: &ClientConfig,
    connector: &C,
    prompt: &P,
) -> Result<Summary, Error>
where
    C: Connect + ?Sized,
    P: Confirm + ?Sized,
{
    info!("Bucket search term: {:?}", config.search_term);
    info!("Profile: {:?}", config.profile);
    info!("Region: {:?}", config.region.name());

    let session = connect(connector, &config.region).await?;

    info!("Attempting to list all S3 buckets");

    let bucket_names = session.store.list_buckets()
        .await
        .map_err(Error::ListBuckets)?;

    let matches = matching_buckets(&bucket_names, &config.search_term);

    if matches.is_empty() {
        println!(
            "❗️ No buckets found matching the search term: {:?}",
            config.search_term,
        );

        return Ok(Summary::NoMatches);
    }

    if !gate::approve(config, &matches, prompt)? {
        return Ok(Summary::Declined);
    }

    let mut processed = Vec::with_capacity(matches.len());

    for name in &matches {
        let region = session.store.bucket_region(name)
            .await
            .map_err(|source| Error::BucketRegion {
                bucket: name.into(),
                source: source,
            })?;

        info!("Bucket {:?} is in region {:?}", name, region.name());
        info!(
            "Changing session region to match the bucket: UserSession={:?} BucketSession={:?}",
            session.region.name(),
            region.name(),
        );

        let regional = connect(connector, &region).await?;
        let bucket   = Bucket::new(name).in_region(region);

        let verdict = safety::check(
            config,
            name,
            &regional.region,
            &regional.networks,
        ).await?;

        if let Verdict::Collision(network) = verdict {
            info!(
                "Skipping bucket {:?}: VPC {:?} exists in {}",
                name,
                network,
                regional.region,
            );

            println!(
                "🛑 Skipping {}, it matches live VPC {:?} in {}",
                name,
                network,
                regional.region,
            );

            processed.push((bucket, Outcome::Skipped { network }));

            continue;
        }

        let destroyed = destroyer::destroy(config, &bucket, &regional.store)
            .await?;

        debug!("run: {:?} -> {:?}", name, destroyed);

        processed.push((bucket, destroyed.into()));
    }

    Ok(Summary::Processed(processed))
}
