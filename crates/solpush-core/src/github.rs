//! GitHub URL helpers: profile normalization, badge and compare links.

pub const GITHUB_URL: &str = "https://github.com/";
pub const BADGE_URL: &str = "https://img.shields.io/badge/GitHub-";

/// Turn a bare username into a profile URL. Anything already starting
/// with `http` is returned unchanged.
pub fn normalize_author_github(author_github: &str) -> String {
    if author_github.starts_with("http") {
        author_github.to_string()
    } else {
        format!("{GITHUB_URL}{author_github}")
    }
}

/// Username token for the badge: drops the first `https://github.com/`
/// and then the first remaining `/`.
pub fn github_username(profile_url: &str) -> String {
    if profile_url.is_empty() {
        return String::new();
    }
    profile_url.replacen(GITHUB_URL, "", 1).replacen('/', "", 1)
}

pub fn badge_url(username: &str) -> String {
    format!("{BADGE_URL}{username}-blue")
}

pub fn compare_url(owner: &str, repo: &str, base: &str, feature: &str) -> String {
    format!("{GITHUB_URL}{owner}/{repo}/compare/{base}...{feature}?expand=1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_username_gets_prefixed() {
        assert_eq!(normalize_author_github("janedoe"), "https://github.com/janedoe");
    }

    #[test]
    fn full_url_passes_through() {
        assert_eq!(
            normalize_author_github("https://github.com/janedoe"),
            "https://github.com/janedoe"
        );
        assert_eq!(
            normalize_author_github("http://example.com/jane"),
            "http://example.com/jane"
        );
    }

    #[test]
    fn username_from_profile() {
        assert_eq!(github_username("https://github.com/janedoe"), "janedoe");
        assert_eq!(github_username("https://github.com/janedoe/"), "janedoe");
        assert_eq!(github_username(""), "");
    }

    #[test]
    fn badge_for_username() {
        assert_eq!(
            badge_url("janedoe"),
            "https://img.shields.io/badge/GitHub-janedoe-blue"
        );
    }

    #[test]
    fn compare_url_format() {
        assert_eq!(
            compare_url("acme", "algo", "main", "feature/x"),
            "https://github.com/acme/algo/compare/main...feature/x?expand=1"
        );
    }
}
