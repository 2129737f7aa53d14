//! Folder names for git modules

use url::Url;

/// Derive the on-disk folder name for a repository.
///
/// Takes the last path segment and strips a trailing `.git`. Handles regular
/// URLs, scp-style remotes (`git@host:org/repo.git`) and plain paths.
/// Returns `None` when nothing usable is left.
pub fn derive_folder_name(repo: &str) -> Option<String> {
    let repo = repo.trim();

    // `host:path` remotes parse as cannot-be-a-base urls with no segments
    let last = match Url::parse(repo) {
        Ok(url) if !url.cannot_be_a_base() => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        _ => repo
            .split(['/', '\\', ':'])
            .filter(|s| !s.is_empty())
            .last()
            .map(str::to_string),
    }?;

    let name = last.strip_suffix(".git").unwrap_or(&last);
    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_with_git_suffix() {
        assert_eq!(
            derive_folder_name("https://github.com/org/log-tools.git"),
            Some("log-tools".to_string())
        );
    }

    #[test]
    fn test_url_without_suffix_and_trailing_slash() {
        assert_eq!(
            derive_folder_name("https://git.example.com/org/reporting/"),
            Some("reporting".to_string())
        );
    }

    #[test]
    fn test_scp_style_remote() {
        assert_eq!(
            derive_folder_name("git@github.com:org/deploy.git"),
            Some("deploy".to_string())
        );
        assert_eq!(
            derive_folder_name("git@github.com:deploy.git"),
            Some("deploy".to_string())
        );
        assert_eq!(
            derive_folder_name("github.com:org/tools.git"),
            Some("tools".to_string())
        );
        assert_eq!(
            derive_folder_name("localhost:tools.git"),
            Some("tools".to_string())
        );
    }

    #[test]
    fn test_local_path() {
        assert_eq!(
            derive_folder_name("/srv/mirrors/shared.git"),
            Some("shared".to_string())
        );
        assert_eq!(
            derive_folder_name("file:///srv/mirrors/shared.git"),
            Some("shared".to_string())
        );
    }

    #[test]
    fn test_only_git_suffix_stripped() {
        assert_eq!(
            derive_folder_name("https://example.com/org/my.git.tools"),
            Some("my.git.tools".to_string())
        );
    }

    #[test]
    fn test_unusable_urls() {
        assert_eq!(derive_folder_name(""), None);
        assert_eq!(derive_folder_name("https://github.com"), None);
        assert_eq!(derive_folder_name("https://github.com/org/.git"), None);
        assert_eq!(derive_folder_name("../"), None);
    }
}
