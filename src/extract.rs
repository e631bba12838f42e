//! Walks the reservation/instance result structure and produces either
//! a private IP list or display rows with null-safe defaults.

use aws_sdk_ec2::types::{Instance, InstanceStateName, Reservation};
use chrono::{DateTime, Utc};
use tabled::Tabled;

const MISSING: &str = "N/A";

/// One display row per live instance, every absent field already
/// substituted with its sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct InstanceRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "PrivateIp")]
    pub private_ip: String,
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "AZ")]
    pub az: String,
    #[tabled(rename = "InstanceId")]
    pub instance_id: String,
    #[tabled(rename = "InstanceType")]
    pub instance_type: String,
    #[tabled(rename = "LaunchTime")]
    pub launch_time: String,
}

/// Terminated or state-less instances are invisible in every output
/// mode: stale entries must not pollute search results or IP lists.
fn is_live(instance: &Instance) -> bool {
    match instance.state().and_then(|s| s.name()) {
        Some(name) => *name != InstanceStateName::Terminated,
        None => false,
    }
}

fn live_instances<'a>(reservations: &'a [Reservation]) -> impl Iterator<Item = &'a Instance> + 'a {
    reservations
        .iter()
        .flat_map(|r| r.instances())
        .filter(|i| is_live(i))
}

/// Private IPs of live instances, provider order preserved. Instances
/// without an address are skipped rather than padded.
pub fn private_ips(reservations: &[Reservation]) -> Vec<String> {
    live_instances(reservations)
        .filter_map(|i| i.private_ip_address())
        .map(str::to_string)
        .collect()
}

/// Seven-field display rows for live instances, provider order
/// preserved.
pub fn instance_rows(reservations: &[Reservation]) -> Vec<InstanceRow> {
    live_instances(reservations).map(row_for).collect()
}

fn row_for(instance: &Instance) -> InstanceRow {
    InstanceRow {
        name: name_tag(instance).unwrap_or_default(),
        private_ip: instance
            .private_ip_address()
            .unwrap_or(MISSING)
            .to_string(),
        state: instance
            .state()
            .and_then(|s| s.name())
            .map(|n| n.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        az: instance
            .placement()
            .and_then(|p| p.availability_zone())
            .unwrap_or(MISSING)
            .to_string(),
        instance_id: instance.instance_id().unwrap_or(MISSING).to_string(),
        instance_type: instance
            .instance_type()
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        launch_time: instance
            .launch_time()
            .and_then(format_launch_time)
            .unwrap_or_else(|| MISSING.to_string()),
    }
}

/// Value of the first tag whose key is `Name`.
fn name_tag(instance: &Instance) -> Option<String> {
    instance
        .tags()
        .iter()
        .find(|tag| tag.key() == Some("Name"))
        .and_then(|tag| tag.value())
        .map(str::to_string)
}

/// The API delivers launch times as UTC epoch timestamps.
fn format_launch_time(ts: &aws_sdk_ec2::primitives::DateTime) -> Option<String> {
    DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
