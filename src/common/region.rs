// Handles region things
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use std::fmt;
use tracing::debug;

// Region that S3 reports as an empty location constraint.
const LEGACY_US_REGION: &str = "us-east-1";

// Region that S3 reports as the `EU` location constraint.
const LEGACY_EU_REGION: &str = "eu-west-1";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later depending on CLI options.
        let possibilities = vec![
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region: region,
        }
    }

    /// Returns the `Region` for an S3 bucket location constraint.
    ///
    /// Location constraints for sufficiently old buckets may not quite meet
    /// expectations. An empty constraint means `us-east-1` and `EU` means
    /// `eu-west-1`, matching what the web console does.
    pub fn from_location_constraint(location: Option<&str>) -> Self {
        let location = match location {
            None | Some("") => LEGACY_US_REGION,
            Some("EU")      => LEGACY_EU_REGION,
            Some(location)  => location,
        };

        Self::default().set_region(location)
    }

    // Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}

impl ProvideRegion for &Region {
    fn region(&self) -> future::ProvideRegion {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}
