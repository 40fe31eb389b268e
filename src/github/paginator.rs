use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::github::rate_limiter::RateLimiter;
use crate::error::{Error, Result};

/// Walks a page-numbered GitHub listing until a page comes back empty or
/// shorter than `per_page`.
pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: &'a RateLimiter,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, rate_limiter: &'a RateLimiter) -> Self {
        Self {
            client,
            rate_limiter,
        }
    }

    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: &str,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        self.fetch_all_matching(resource, base_url, per_page, |_: &T| true)
            .await
    }

    /// Like [`fetch_all`](Self::fetch_all), but keeps only items accepted by
    /// `keep`. The last-page check always uses the unfiltered page length.
    pub async fn fetch_all_matching<T, F>(
        &self,
        resource: &str,
        base_url: &str,
        per_page: u32,
        mut keep: F,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            self.rate_limiter.wait().await;

            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;
            self.rate_limiter.update_from_headers(response.headers()).await;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Fetch {
                    resource: resource.to_string(),
                    page,
                    status,
                });
            }

            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items.into_iter().filter(|item| keep(item)));

            if items_count == 0 || items_count < per_page as usize {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }
}
