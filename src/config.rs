use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_ORG: &str = "elizaOS-plugins";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT: &str = "maintainers.csv";
pub const DEFAULT_EXCLUDED_REPOS: &str = ".github";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub org: String,
    pub api_base_url: String,
    pub output_path: String,
    pub include_issue_counts: bool,
    pub excluded_repos: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("Please set GITHUB_TOKEN in your environment variables".to_string())
            })?;

        let org = lookup("GITHUB_ORG").unwrap_or_else(|| DEFAULT_ORG.to_string());

        let api_base_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let output_path = lookup("REPORT_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let include_issue_counts = match lookup("REPORT_INCLUDE_ISSUES") {
            Some(v) => parse_bool("REPORT_INCLUDE_ISSUES", &v)?,
            None => true,
        };

        let excluded_repos = parse_list(
            &lookup("REPORT_EXCLUDE_REPOS").unwrap_or_else(|| DEFAULT_EXCLUDED_REPOS.to_string()),
        );

        Ok(Self {
            github_token,
            org,
            api_base_url,
            output_path,
            include_issue_counts,
            excluded_repos,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("{} must be true or false, got '{}'", key, other))),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub org: String,
    pub include_issue_counts: bool,
    pub excluded_repos: Vec<String>,
    pub show_progress: bool,
}

impl ReportConfig {
    pub fn is_excluded(&self, repo_name: &str) -> bool {
        self.excluded_repos.iter().any(|name| name == repo_name)
    }
}

impl From<&Config> for ReportConfig {
    fn from(config: &Config) -> Self {
        Self {
            org: config.org.clone(),
            include_issue_counts: config.include_issue_counts,
            excluded_repos: config.excluded_repos.clone(),
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "ghp_test")])).unwrap();
        assert_eq!(config.github_token, "ghp_test");
        assert_eq!(config.org, DEFAULT_ORG);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.output_path, DEFAULT_OUTPUT);
        assert!(config.include_issue_counts);
        assert_eq!(config.excluded_repos, vec![".github".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("GITHUB_ORG", "acme"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3/"),
            ("REPORT_OUTPUT", "out.csv"),
            ("REPORT_INCLUDE_ISSUES", "false"),
            ("REPORT_EXCLUDE_REPOS", " .github , meta,,"),
        ]))
        .unwrap();

        assert_eq!(config.org, "acme");
        assert_eq!(config.api_base_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.output_path, "out.csv");
        assert!(!config.include_issue_counts);
        assert_eq!(config.excluded_repos, vec![".github".to_string(), "meta".to_string()]);
    }

    #[test]
    fn test_empty_exclusion_list_disables_filter() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("REPORT_EXCLUDE_REPOS", ""),
        ]))
        .unwrap();
        assert!(config.excluded_repos.is_empty());
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("REPORT_INCLUDE_ISSUES", "maybe"),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_report_config_exclusion() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "ghp_test")])).unwrap();
        let report_config = ReportConfig::from(&config);
        assert!(report_config.is_excluded(".github"));
        assert!(!report_config.is_excluded("plugin-a"));
        assert!(report_config.show_progress);
    }
}
