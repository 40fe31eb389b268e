use std::collections::HashMap;

use crate::error::Result;
use crate::models::{Collaborator, Issue, Report, ReportRow, Repository};
use crate::report::writer::render_csv;

/// Accumulates one row per repository, in the order they are pushed.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    rows: Vec<ReportRow>,
    include_issue_counts: bool,
}

impl ReportBuilder {
    pub fn new(include_issue_counts: bool) -> Self {
        Self {
            rows: Vec::new(),
            include_issue_counts,
        }
    }

    /// `issues` is ignored when the report has no issue column.
    pub fn push(&mut self, repo: &Repository, collaborators: &[Collaborator], issues: &[Issue]) {
        let issues = self.include_issue_counts.then_some(issues);
        self.rows.push(ReportRow::new(repo, collaborators, issues));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(self) -> Report {
        Report {
            rows: self.rows,
            include_issue_counts: self.include_issue_counts,
        }
    }
}

/// One-shot form: joins already-fetched data keyed by repository name and
/// renders it. Repositories missing from a map get an empty list.
pub fn build_report(
    repos: &[Repository],
    collaborators_by_repo: &HashMap<String, Vec<Collaborator>>,
    issues_by_repo: &HashMap<String, Vec<Issue>>,
    include_issue_counts: bool,
) -> Result<String> {
    let mut builder = ReportBuilder::new(include_issue_counts);

    for repo in repos {
        let collaborators = collaborators_by_repo
            .get(&repo.name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let issues = issues_by_repo
            .get(&repo.name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        builder.push(repo, collaborators, issues);
    }

    render_csv(&builder.build())
}
