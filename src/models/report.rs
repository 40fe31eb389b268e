use serde::{Deserialize, Serialize};

use super::collaborator::Collaborator;
use super::issue::Issue;
use super::repository::Repository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub repo_name: String,
    pub has_maintainers: bool,
    pub maintainer_logins: Vec<String>,
    /// `None` when the report is built without issue counts.
    pub open_issue_count: Option<usize>,
    pub repo_url: String,
}

impl ReportRow {
    pub fn new(repo: &Repository, collaborators: &[Collaborator], issues: Option<&[Issue]>) -> Self {
        let maintainer_logins: Vec<String> = collaborators
            .iter()
            .filter(|c| c.is_maintainer())
            .map(|c| c.login.clone())
            .collect();

        Self {
            repo_name: repo.name.clone(),
            has_maintainers: !maintainer_logins.is_empty(),
            maintainer_logins,
            open_issue_count: issues.map(|i| i.len()),
            repo_url: repo.html_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub include_issue_counts: bool,
}
