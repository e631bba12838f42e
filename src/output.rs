//! Output rendering: mode dispatch, IP joining, and the bordered
//! instance table.
//!
//! Everything here builds strings rather than printing so the exact
//! output can be asserted on; `main` owns the actual writes to stdout.

use aws_sdk_ec2::types::Reservation;
use tabled::settings::Style;
use tabled::Table;

use crate::cli::Args;
use crate::extract::{self, InstanceRow};

/// Render the complete stdout payload for a describe result, trailing
/// newlines included. Zero reservations yields the no-match message;
/// otherwise the mode flags pick between IP output and the table.
pub fn render(args: &Args, reservations: &[Reservation]) -> String {
    if reservations.is_empty() {
        return "no matching instances found\n".to_string();
    }

    if args.ip_only {
        let ips = extract::private_ips(reservations);
        if args.newline {
            ips.iter().map(|ip| format!("{}\n", ip)).collect()
        } else {
            format!("{}\n", join_ips(&ips, &args.delimiter))
        }
    } else {
        let rows = extract::instance_rows(reservations);
        format!("{}\n", render_table(&rows))
    }
}

/// Join IPs into the single-line form.
pub fn join_ips(ips: &[String], delimiter: &str) -> String {
    ips.join(delimiter)
}

/// Render the bordered table with the fixed seven-column header.
pub fn render_table(rows: &[InstanceRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::ascii());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Instance, InstanceState, InstanceStateName, Tag};
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["ec2grep"];
        full.extend_from_slice(argv);
        full.push("web");
        Args::try_parse_from(full).unwrap()
    }

    fn running_with_ip(ip: &str) -> Instance {
        Instance::builder()
            .state(
                InstanceState::builder()
                    .name(InstanceStateName::Running)
                    .build(),
            )
            .private_ip_address(ip)
            .build()
    }

    fn reservations_of(instances: Vec<Instance>) -> Vec<Reservation> {
        vec![Reservation::builder().set_instances(Some(instances)).build()]
    }

    fn two_ips() -> Vec<Reservation> {
        reservations_of(vec![running_with_ip("10.0.0.1"), running_with_ip("10.0.0.2")])
    }

    fn ips() -> Vec<String> {
        vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()]
    }

    #[test]
    fn zero_reservations_render_the_no_match_message() {
        assert_eq!(render(&args(&[]), &[]), "no matching instances found\n");
        assert_eq!(render(&args(&["-i", "-n"]), &[]), "no matching instances found\n");
    }

    #[test]
    fn newline_mode_prints_one_ip_per_line() {
        assert_eq!(render(&args(&["-i", "-n"]), &two_ips()), "10.0.0.1\n10.0.0.2\n");
    }

    #[test]
    fn newline_mode_with_no_live_ips_prints_nothing() {
        let res = reservations_of(vec![Instance::builder()
            .state(
                InstanceState::builder()
                    .name(InstanceStateName::Terminated)
                    .build(),
            )
            .private_ip_address("10.0.0.9")
            .build()]);
        assert_eq!(render(&args(&["-i", "-n"]), &res), "");
    }

    #[test]
    fn joined_mode_uses_the_configured_delimiter() {
        assert_eq!(render(&args(&["-i", "-d", ","]), &two_ips()), "10.0.0.1,10.0.0.2\n");
    }

    #[test]
    fn joined_mode_defaults_to_a_space() {
        assert_eq!(render(&args(&["-i"]), &two_ips()), "10.0.0.1 10.0.0.2\n");
    }

    #[test]
    fn table_mode_renders_headers_and_cells() {
        let res = reservations_of(vec![Instance::builder()
            .state(
                InstanceState::builder()
                    .name(InstanceStateName::Running)
                    .build(),
            )
            .tags(Tag::builder().key("Name").value("web-1").build())
            .private_ip_address("10.0.0.1")
            .build()]);
        let rendered = render(&args(&[]), &res);
        for header in [
            "Name",
            "PrivateIp",
            "State",
            "AZ",
            "InstanceId",
            "InstanceType",
            "LaunchTime",
        ] {
            assert!(rendered.contains(header), "missing header: {}", header);
        }
        assert!(rendered.contains("web-1"));
        assert!(rendered.contains("10.0.0.1"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn joins_with_custom_delimiter() {
        assert_eq!(join_ips(&ips(), ","), "10.0.0.1,10.0.0.2");
    }

    #[test]
    fn single_ip_has_no_delimiter() {
        assert_eq!(join_ips(&ips()[..1], ","), "10.0.0.1");
    }

    #[test]
    fn no_ips_joins_to_an_empty_line() {
        assert_eq!(join_ips(&[], ","), "");
    }

    #[test]
    fn table_has_ascii_borders() {
        let rows = vec![InstanceRow {
            name: "web-1".into(),
            private_ip: "10.0.0.1".into(),
            state: "running".into(),
            az: "eu-west-1a".into(),
            instance_id: "i-0123456789abcdef0".into(),
            instance_type: "t3.micro".into(),
            launch_time: "2023-11-14 22:13:20".into(),
        }];
        let rendered = render_table(&rows);
        assert!(rendered.contains('+'), "expected an ascii border");
        assert!(rendered.contains("2023-11-14 22:13:20"));
    }

    #[test]
    fn blank_name_cell_keeps_row_intact() {
        let rows = vec![InstanceRow {
            name: String::new(),
            private_ip: "N/A".into(),
            state: "stopped".into(),
            az: "N/A".into(),
            instance_id: "i-0".into(),
            instance_type: "N/A".into(),
            launch_time: "N/A".into(),
        }];
        let rendered = render_table(&rows);
        assert!(rendered.contains("i-0"));
        assert!(rendered.contains("stopped"));
    }
}
