//! Commit hash lookup
//!
//! The composer accepts a hash from the caller; this module supplies one from the current
//! repository instead. The [Repository] trait keeps the CLI independent of `git2` so tests
//! can run against [mock::MockRepository].
//!
//! ```rust
//! # use build_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> build_version::Result<()> {
//! let hash = repo.short_head_hash(7)?;
//! assert_eq!(hash.len(), 7);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::{Error, Result};

/// Source of the commit hash for dev builds
///
/// Implementors must be `Send` so a repository can move to a worker thread.
pub trait Repository: Send {
    /// Full lowercase hex id of the commit HEAD points at
    ///
    /// # Returns
    /// * `Ok(String)` - 40-character object id
    /// * `Err` - If HEAD is unborn or detached from any commit, or on a Git error
    fn head_hash(&self) -> Result<String>;

    /// HEAD hash abbreviated to `len` characters
    fn short_head_hash(&self, len: usize) -> Result<String> {
        let full = self.head_hash()?;
        full.get(..len)
            .map(str::to_string)
            .ok_or_else(|| Error::config(format!("cannot abbreviate '{}' to {}", full, len)))
    }
}
