// awsrm: A tool for emptying and removing AWS S3 buckets by name.
#![forbid(unsafe_code)]
use clap::crate_version;
use std::process::ExitCode;
use tracing::{
    debug,
    Level,
};

mod aws;
mod cli;
mod common;
mod ec2;
mod remover;
mod s3;

use aws::AwsConnector;
use cli::Action;
use common::{
    ClientConfig,
    DialoguerConfirm,
    Error,
};

// Verbose narration is logged at INFO and API detail at DEBUG, anything else
// only shows warnings.
fn log_level(config: &ClientConfig) -> Level {
    if config.debug {
        Level::DEBUG
    }
    else if config.is_verbose() {
        Level::INFO
    }
    else {
        Level::WARN
    }
}

async fn remove(config: ClientConfig) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(log_level(&config))
        .with_target(false)
        .init();

    let connector = AwsConnector::new(config.profile.clone());
    let summary   = remover::run(&config, &connector, &DialoguerConfirm).await?;

    debug!("main: {:?}", summary);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let ret = match cli::parse_args() {
        Ok(Action::Remove(config)) => remove(config).await,
        Ok(Action::Version)        => {
            println!("{}", crate_version!());
            Ok(())
        },
        Err(err) => Err(err),
    };

    match ret {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Prints the whole chain, down to the provider's own message.
            eprintln!("❗️ {:#}", anyhow::Error::from(err));
            ExitCode::FAILURE
        },
    }
}
