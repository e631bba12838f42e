use clap::Parser;
use tracing::debug;

use ec2grep::cli::Args;
use ec2grep::error::{Error, Result};
use ec2grep::{ec2, output};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Version wins over everything else, including the remote call.
    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging();

    if let Err(e) = run(&args).await {
        report(&e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let search = args.search.as_deref().unwrap_or_default();

    let sdk_config = ec2::load_sdk_config().await?;
    let client = aws_sdk_ec2::Client::new(&sdk_config);

    debug!("searching {} for pattern *{}*", args.filter_name, search);
    let filter = ec2::search_filter(&args.filter_name, search);
    let reservations = ec2::describe_instances(&client, filter).await?;
    print!("{}", output::render(args, &reservations));

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only data. Silent unless
/// RUST_LOG is set.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &Error) {
    eprintln!("Error: {}", err);
    match err {
        Error::MissingRegion => {
            eprintln!();
            eprintln!("Please ensure:");
            eprintln!("  - AWS region is set (AWS_REGION environment variable or ~/.aws/config)");
            eprintln!("  - AWS credentials are configured (~/.aws/credentials or environment variables)");
        }
        Error::DescribeInstances(_) => {
            eprintln!();
            eprintln!("Possible causes:");
            eprintln!("  - Insufficient IAM permissions (ec2:DescribeInstances required)");
            eprintln!("  - Invalid filter parameters");
            eprintln!("  - Network connectivity issues");
            eprintln!("  - AWS API throttling or rate limiting");
        }
    }
}
