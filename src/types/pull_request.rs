use std::fmt;

/// Repository the triggering event belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Immutable snapshot of the labeled pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// Login of the pull request author, excluded from every selection
    pub author: String,
    /// Name of the label that triggered the run
    pub label: String,
}
