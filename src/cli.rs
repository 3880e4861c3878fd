// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Error,
    Region,
};
use tracing::debug;

// Default AWS region if one isn't provided on the command line
const DEFAULT_REGION: &str = "us-east-1";

const S3_LONG_ABOUT: &str = "\
Deletes an S3 bucket's contents and the bucket.

This finds every bucket whose name contains the search term, in either all
lowercase or all uppercase, and asks whether they should be deleted. If you
say yes, each bucket is emptied (including all object versions and delete
markers) and then deleted. In quiet mode there is no prompt.

Unless --skip-safety-check is given, a bucket is left alone if a VPC in the
bucket's region has a name (minus any -vpc suffix) contained in the bucket
name.

WARNING: This will delete buckets and their contents. Double check you
actually want to delete whatever you are using this tool with.";

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Find, empty and delete buckets.
    Remove(ClientConfig),

    /// Print the version and exit.
    Version,
}

// Ensures that the AWS region that we're passed at least looks like one.
// The SDK accepts any string, so a typo would otherwise only show up as a
// connection error.
fn is_valid_aws_region(s: &str) -> Result<String, String> {
    let valid = !s.is_empty()
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(s.to_string())
    }
    else {
        Err(format!("'{}' is not a valid AWS region name", s))
    }
}

// Create the clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("PROFILE")
                .env("AWS_PROFILE")
                .hide_env_values(true)
                .long("profile")
                .short('p')
                .value_name("PROFILE")
                .help("The AWS profile you wish to use")
                .global(true)
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("The AWS region you wish to use")
                .default_value(DEFAULT_REGION)
                .value_parser(is_valid_aws_region)
                .global(true)
        )
        .arg(
            Arg::new("VERBOSE")
                .long("verbose")
                .short('v')
                .help("Enables verbose mode")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .arg(
            Arg::new("QUIET")
                .long("quiet")
                .short('q')
                .help("Enables quiet mode, you will not be prompted for any input")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .arg(
            Arg::new("DRY_RUN")
                .long("dry-run")
                .help("Enables dry-run mode (will not make any changes)")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .arg(
            Arg::new("DEBUG")
                .long("debug")
                .help("Enables debug logging, implies --verbose")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("s3")
                .about("Deletes S3 buckets matching a search term and their contents")
                .long_about(S3_LONG_ABOUT)
                .arg(
                    Arg::new("SEARCH_TERM")
                        .value_name("SEARCH_TERM")
                        .help("Part of the bucket name(s) to delete")
                        .required(true)
                )
                .arg(
                    Arg::new("SKIP_SAFETY_CHECK")
                        .long("skip-safety-check")
                        .help("Delete buckets even if their name matches a VPC in the same region")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("version")
                .about("Version information")
        )
}

// Build the ClientConfig from the s3 subcommand matches. Global arguments
// are propagated down to the subcommand by clap.
fn client_config(matches: &ArgMatches) -> Result<ClientConfig, Error> {
    let search_term = matches.get_one::<String>("SEARCH_TERM")
        .cloned()
        .unwrap_or_default();

    let region = matches.get_one::<String>("REGION")
        .map(String::as_str)
        .unwrap_or(DEFAULT_REGION);

    let config = ClientConfig {
        search_term:       search_term,
        profile:           matches.get_one::<String>("PROFILE").cloned(),
        region:            Region::default().set_region(region),
        verbose:           matches.get_flag("VERBOSE"),
        quiet:             matches.get_flag("QUIET"),
        dry_run:           matches.get_flag("DRY_RUN"),
        debug:             matches.get_flag("DEBUG"),
        skip_safety_check: matches.get_flag("SKIP_SAFETY_CHECK"),
    };

    debug!("client_config: {:?}", config);

    config.validate()
}

fn action(matches: &ArgMatches) -> Result<Action, Error> {
    match matches.subcommand() {
        Some(("s3", matches))  => Ok(Action::Remove(client_config(matches)?)),
        Some(("version", _))   => Ok(Action::Version),
        Some((command, _))     => {
            Err(Error::Config(format!("unknown command '{}'", command)))
        },
        None => Err(Error::Config("no command given".into())),
    }
}

pub fn parse_args() -> Result<Action, Error> {
    debug!("Parsing command line arguments");

    action(&create_app().get_matches())
}
