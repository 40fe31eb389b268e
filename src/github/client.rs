use reqwest::{header, Client};

use crate::config::DEFAULT_API_URL;
use crate::error::Result;
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::RateLimiter;
use crate::models::{Collaborator, Issue, Repository};

/// Largest page size GitHub accepts.
pub const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("maintreport/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: PER_PAGE,
        })
    }

    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, PER_PAGE);
        self
    }

    pub async fn list_public_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/orgs/{}/repos?type=public", self.base_url, org);
        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        tracing::info!("Fetching public repositories for: {}", org);
        paginator
            .fetch_all(&format!("repos for {}", org), &url, self.per_page)
            .await
    }

    /// A 404 means the repository vanished or the token cannot see its
    /// collaborators; that repository then reports no collaborators.
    pub async fn list_outside_collaborators(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Vec<Collaborator>> {
        let url = format!(
            "{}/repos/{}/{}/collaborators?affiliation=outside",
            self.base_url, org, repo
        );
        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        tracing::debug!("Fetching outside collaborators for: {}/{}", org, repo);

        match paginator
            .fetch_all(&format!("collaborators for {}/{}", org, repo), &url, self.per_page)
            .await
        {
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    "No collaborator data for {}/{} (404), treating as none: {}",
                    org,
                    repo,
                    e
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub async fn list_open_issues(&self, org: &str, repo: &str) -> Result<Vec<Issue>> {
        let url = format!("{}/repos/{}/{}/issues?state=open", self.base_url, org, repo);
        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        tracing::debug!("Fetching open issues for: {}/{}", org, repo);
        paginator
            .fetch_all_matching(
                &format!("issues for {}/{}", org, repo),
                &url,
                self.per_page,
                |issue: &Issue| !issue.is_pull_request(),
            )
            .await
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}
