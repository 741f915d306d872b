//! Git repository wrapper.

use std::path::Path;

use git2::{Oid, Repository as Git2Repo, Sort, StatusOptions};
use logsmith_commit::{Author, format_record};
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns all tags in the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn tags(&self) -> GitResult<Vec<String>> {
        let tags = self.inner.tag_names(None)?;
        Ok(tags.iter().flatten().map(String::from).collect())
    }

    /// Returns tags sorted by the time of the commit they point to, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a tag cannot be resolved to a commit.
    pub fn tags_by_date(&self) -> GitResult<Vec<String>> {
        let mut dated = Vec::new();
        for tag in self.tags()? {
            let commit = self
                .inner
                .revparse_single(&format!("refs/tags/{tag}"))?
                .peel_to_commit()?;
            dated.push((commit.time().seconds(), tag));
        }

        dated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        Ok(dated.into_iter().map(|(_, tag)| tag).collect())
    }

    /// Returns the second most recent tag, if there are at least two.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn previous_tag(&self) -> GitResult<Option<String>> {
        Ok(self.tags_by_date()?.into_iter().nth(1))
    }

    /// Returns the full hash of the root commit of HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be walked.
    pub fn first_commit(&self) -> GitResult<Option<String>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;

        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            if commit.parent_count() == 0 {
                return Ok(Some(commit.id().to_string()));
            }
        }

        Ok(None)
    }

    /// Returns a tag pointing at HEAD, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD or the tags cannot be read.
    pub fn current_tag(&self) -> GitResult<Option<String>> {
        let head = self.inner.head()?.peel_to_commit()?.id();

        for tag in self.tags()? {
            let target = self
                .inner
                .revparse_single(&format!("refs/tags/{tag}"))?
                .peel_to_commit()?
                .id();
            if target == head {
                return Ok(Some(tag));
            }
        }

        Ok(None)
    }

    /// Returns the current branch name (`HEAD` when detached).
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be read.
    pub fn current_branch(&self) -> GitResult<String> {
        let head = self.inner.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Returns true if the working tree has no uncommitted changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be computed.
    pub fn is_clean(&self) -> GitResult<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false);
        Ok(self.inner.statuses(Some(&mut options))?.is_empty())
    }

    /// Resolves a revision to a commit id.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the revision does not name a commit.
    pub fn resolve(&self, rev: &str) -> GitResult<Oid> {
        self.inner
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::RefNotFound(rev.to_string()))
    }

    /// Renders the history of `from...to` as raw log text.
    ///
    /// The range is symmetric: commits reachable from either end but not
    /// from their merge base. Without `from` the whole history of `to` is
    /// rendered. Commits are emitted newest first, each introduced by the
    /// log delimiter, the way `git log --pretty="----%n%s|%h|%an|%ae%n%b"`
    /// prints them.
    ///
    /// # Errors
    ///
    /// Returns an error if a revision cannot be resolved or the history
    /// cannot be walked.
    pub fn log_text(&self, from: Option<&str>, to: &str) -> GitResult<String> {
        let to_oid = self.resolve(to)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;

        if let Some(from) = from {
            let from_oid = self.resolve(from)?;
            revwalk.push(from_oid)?;
            if let Ok(base) = self.inner.merge_base(from_oid, to_oid) {
                revwalk.hide(base)?;
            }
        }

        let mut text = String::new();
        let mut count = 0usize;
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let short_id = commit.as_object().short_id()?;
            let signature = commit.author();
            let author = Author::new(
                signature.name().unwrap_or_default(),
                signature.email().unwrap_or_default(),
            );

            let body = match commit.body() {
                Some(body) if !body.is_empty() => format!("{body}\n"),
                _ => String::new(),
            };

            text.push_str(&format_record(
                commit.summary().unwrap_or_default(),
                short_id.as_str().unwrap_or_default(),
                &author,
                &body,
            ));
            text.push('\n');
            count += 1;
        }

        debug!(?from, to, count, "rendered history");
        Ok(text)
    }
}
