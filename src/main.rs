use clap::Parser;
use tracing_subscriber::EnvFilter;

use maintreport::{write_csv, Config, GitHubClient, ReportConfig, ReportPipeline};

#[derive(Parser, Debug)]
#[command(name = "maintreport")]
#[command(version)]
#[command(about = "Report maintainership status for a GitHub organization's public repositories")]
struct Args {
    /// GitHub organization to report on (overrides GITHUB_ORG)
    #[arg(short = 'g', long)]
    org: Option<String>,

    /// Output CSV file (overrides REPORT_OUTPUT)
    #[arg(short, long)]
    output: Option<String>,

    /// Repository name to leave out of the report; repeat for several
    /// (replaces REPORT_EXCLUDE_REPOS)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Skip fetching issues and drop the Open Issues column
    #[arg(long)]
    no_issues: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("maintreport=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(org) = args.org {
        config.org = org;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if !args.exclude.is_empty() {
        config.excluded_repos = args.exclude;
    }
    if args.no_issues {
        config.include_issue_counts = false;
    }

    let mut report_config = ReportConfig::from(&config);
    report_config.show_progress = !args.no_progress;

    // Initialize client
    let github = GitHubClient::with_base_url(&config.github_token, &config.api_base_url)?;

    // Run report
    let pipeline = ReportPipeline::new(github, report_config);
    let report = pipeline.run().await?;

    // Single write once every repository succeeded
    write_csv(&report, &config.output_path)?;
    tracing::info!(
        "Wrote {} rows to {}",
        report.rows.len(),
        config.output_path
    );
    tracing::info!("Report completed.");

    Ok(())
}
