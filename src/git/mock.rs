use crate::error::{Error, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    head: Option<String>,
}

impl MockRepository {
    /// Create a new mock repository with an unborn HEAD
    pub fn new() -> Self {
        MockRepository { head: None }
    }

    /// Create a mock repository whose HEAD points at `hash`
    pub fn with_head(hash: impl Into<String>) -> Self {
        MockRepository {
            head: Some(hash.into()),
        }
    }
}

impl Repository for MockRepository {
    fn head_hash(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| Error::config("Cannot resolve HEAD: repository has no commits"))
    }
}
