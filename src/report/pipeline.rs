use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{Report, Repository};
use crate::report::builder::ReportBuilder;

pub struct ReportPipeline {
    github: GitHubClient,
    config: ReportConfig,
}

impl ReportPipeline {
    pub fn new(github: GitHubClient, config: ReportConfig) -> Self {
        Self { github, config }
    }

    /// Lists the organization's repositories, then fetches collaborators
    /// and issues one repository at a time. Any fatal fetch error aborts
    /// the whole run.
    pub async fn run(&self) -> Result<Report> {
        let org = &self.config.org;

        // Step 1: List repositories
        let repos = self.github.list_public_repos(org).await?;
        tracing::info!("Fetched {} public repos from {}", repos.len(), org);

        let repos = self.filter_excluded(repos);

        // Step 2: Collaborators and issues per repository
        let pb = self.progress_bar(repos.len());
        let mut builder = ReportBuilder::new(self.config.include_issue_counts);

        for repo in &repos {
            pb.set_message(repo.name.clone());

            let collaborators = self
                .github
                .list_outside_collaborators(org, &repo.name)
                .await?;

            let issues = if self.config.include_issue_counts {
                self.github.list_open_issues(org, &repo.name).await?
            } else {
                Vec::new()
            };

            builder.push(repo, &collaborators, &issues);
            pb.inc(1);
        }

        pb.finish_with_message("done");

        let report = builder.build();
        let with_maintainers = report.rows.iter().filter(|r| r.has_maintainers).count();
        tracing::info!(
            "{} of {} repositories have maintainers",
            with_maintainers,
            report.rows.len()
        );
        if let Some(remaining) = self.github.rate_limiter().remaining().await {
            tracing::debug!("API requests remaining: {}", remaining);
        }

        Ok(report)
    }

    fn filter_excluded(&self, repos: Vec<Repository>) -> Vec<Repository> {
        let total = repos.len();
        let repos: Vec<_> = repos
            .into_iter()
            .filter(|r| !self.config.is_excluded(&r.name))
            .collect();

        if repos.len() < total {
            tracing::info!("Excluded {} repositories by name", total - repos.len());
        }
        repos
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}
