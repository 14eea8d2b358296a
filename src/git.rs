use std::path::Path;

use crate::error::Result;

/// Derive the web link base (e.g. `https://github.com/owner/repo`) used to
/// build per-commit URLs. An explicit base wins; otherwise it comes from the
/// `origin` remote of the repository at `repo` or the working directory. A
/// missing repository or remote simply yields `None`.
pub fn resolve_link_base(repo: Option<&Path>, explicit: Option<&str>) -> Result<Option<String>> {
    if let Some(base) = explicit {
        return Ok(Some(base.trim_end_matches('/').to_string()));
    }

    match repo {
        Some(path) => {
            let repo = gix::discover(path)?;
            Ok(origin_link_base(&repo))
        }
        None => {
            let cwd = std::env::current_dir()?;
            match gix::discover(cwd) {
                Ok(repo) => Ok(origin_link_base(&repo)),
                Err(_) => Ok(None),
            }
        }
    }
}

fn origin_link_base(repo: &gix::Repository) -> Option<String> {
    let remote = repo.find_remote("origin").ok()?;
    let url = remote.url(gix::remote::Direction::Fetch)?;
    https_base(&url.to_bstring().to_string())
}

/// Normalize a git remote URL to an https web base without the `.git` suffix.
pub fn https_base(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return Some(trimmed.to_string());
    }

    // scp-like: git@github.com:owner/repo
    if let Some(rest) = trimmed.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        if host.is_empty() || path.is_empty() {
            return None;
        }
        return Some(format!("https://{host}/{path}"));
    }

    if let Some(rest) = trimmed.strip_prefix("ssh://") {
        let rest = rest.strip_prefix("git@").unwrap_or(rest);
        let (host, path) = rest.split_once('/')?;
        if host.is_empty() || path.is_empty() {
            return None;
        }
        return Some(format!("https://{host}/{path}"));
    }

    None
}
