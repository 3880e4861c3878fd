// Bucket name matching
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use tracing::info;

/// Returns the names containing either the lowercase or the uppercase form
/// of `term`, in their original order.
///
/// Mixed case occurrences are not matched, so `Logs` finds neither
/// `app-Logs` nor `aPP-lOGS`.
pub fn matching_buckets(names: &[String], term: &str) -> Vec<String> {
    let lower = term.to_lowercase();
    let upper = term.to_uppercase();

    names.iter()
        .filter(|name| name.contains(&lower) || name.contains(&upper))
        .inspect(|name| info!("Found bucket {:?}", name))
        .cloned()
        .collect()
}
