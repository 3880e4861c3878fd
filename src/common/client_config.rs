// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    Error,
    Region,
};

/// Configuration for a single run.
///
/// This is built once from the command line and then only ever borrowed, so
/// every stage sees the same values.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// The term that bucket names are searched for.
    pub search_term: String,

    /// Named AWS profile to load credentials from.
    ///
    /// If this isn't given, the default credential chain is used.
    pub profile: Option<String>,

    /// The region that our initial AWS client should be created in.
    ///
    /// Buckets are always emptied and deleted through a client in their own
    /// region, regardless of this setting.
    pub region: Region,

    /// Narrate what is happening.
    pub verbose: bool,

    /// Never prompt; matching buckets are approved implicitly.
    pub quiet: bool,

    /// Report what would be removed without removing anything.
    pub dry_run: bool,

    /// Log API level detail. Implies `verbose`.
    pub debug: bool,

    /// Remove buckets even if their name collides with a live VPC.
    pub skip_safety_check: bool,
}

impl ClientConfig {
    /// Returns a `ClientConfig` searching for `search_term`, with every other
    /// setting at its default.
    #[cfg(test)]
    pub fn new(search_term: &str) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }

    /// Checks the settings that the command line parser can't.
    pub fn validate(self) -> Result<Self, Error> {
        if self.search_term.is_empty() {
            return Err(Error::Config("search term must not be empty".into()));
        }

        Ok(self)
    }

    /// Returns `true` if verbose narration should be logged.
    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }
}

impl Default for ClientConfig {
    /// Returns a default `ClientConfig`.
    ///
    /// ```rust
    /// ClientConfig {
    ///     search_term:       String::new(),
    ///     profile:           None,
    ///     region:            Region::new(),
    ///     verbose:           false,
    ///     quiet:             false,
    ///     dry_run:           false,
    ///     debug:             false,
    ///     skip_safety_check: false,
    /// }
    /// ```
    fn default() -> Self {
        Self {
            search_term:       String::new(),
            profile:           None,
            region:            Region::new(),
            verbose:           false,
            quiet:             false,
            dry_run:           false,
            debug:             false,
            skip_safety_check: false,
        }
    }
}
