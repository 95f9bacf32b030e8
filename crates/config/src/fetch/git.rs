//! Git repository cloning.

use git2::{FetchOptions, Repository};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Strip the password from a URL for logs and error messages.
///
/// Values that do not parse as URLs (local paths) come back unchanged.
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) if parsed.password().is_some() => {
            if parsed.set_password(None).is_err() {
                return "<redacted>".to_string();
            }
            parsed.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Clone `repo` below `workdir`, returning the checkout root.
///
/// Tries a shallow (depth=1) clone first and falls back to a full clone,
/// which local-path repositories need. Each attempt clones into its own
/// directory.
pub(crate) fn clone_repository(repo: &str, workdir: &Path) -> Result<PathBuf, ConfigError> {
    let shallow_dest = workdir.join("shallow");
    match shallow_clone(repo, &shallow_dest) {
        Ok(_) => return Ok(shallow_dest),
        Err(e) => debug!(error = %e, "shallow clone failed, retrying with full clone"),
    }

    let full_dest = workdir.join("full");
    Repository::clone(repo, &full_dest).map_err(|e| ConfigError::Fetch {
        operation: format!("git clone {}", redact_url(repo)),
        detail: e.message().to_string(),
    })?;
    Ok(full_dest)
}

fn shallow_clone(url: &str, dest: &Path) -> Result<Repository, git2::Error> {
    let mut fo = FetchOptions::new();
    fo.depth(1);

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fo);
    builder.clone(url, dest)
}
