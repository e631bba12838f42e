//! Filter construction and the DescribeInstances call.

use aws_config::BehaviorVersion;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{Filter, Reservation};
use aws_sdk_ec2::Client as Ec2Client;
use tracing::debug;

use crate::error::{Error, Result};

/// Build the search filter: one attribute, one value, the term wrapped
/// in wildcards. The term itself is not escaped, so any `*` or `?` in
/// it keeps its EC2 pattern meaning.
pub fn search_filter(attribute: &str, term: &str) -> Filter {
    Filter::builder()
        .name(attribute)
        .values(format!("*{}*", term))
        .build()
}

/// Resolve ambient AWS configuration (environment variables, profile
/// files, instance metadata). A missing region is the one resolution
/// failure detectable up front; credential problems surface on the
/// call itself.
pub async fn load_sdk_config() -> Result<aws_config::SdkConfig> {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    match config.region() {
        Some(region) => {
            debug!("resolved AWS region: {}", region);
            Ok(config)
        }
        None => Err(Error::MissingRegion),
    }
}

/// Issue the single DescribeInstances call. No pagination and no
/// retries: one page of reservations is the whole result.
pub async fn describe_instances(client: &Ec2Client, filter: Filter) -> Result<Vec<Reservation>> {
    let resp = client
        .describe_instances()
        .filters(filter)
        .send()
        .await
        .map_err(|e| Error::DescribeInstances(DisplayErrorContext(e).to_string()))?;

    let reservations = resp.reservations.unwrap_or_default();
    debug!("received {} reservation(s)", reservations.len());
    Ok(reservations)
}
