//! GitHub Pages site root derivation.

use url::Url;

const PAGES_DOMAIN: &str = ".github.io";

/// GitHub Pages URL for `owner/repo_name`.
///
/// A repository named `<owner>.github.io` is a personal site served from the
/// bare domain; every other repository is served under a path segment.
pub fn derive_site_root(owner: &str, repo_name: &str) -> String {
    let domain = format!("{owner}{PAGES_DOMAIN}");
    if repo_name == domain {
        format!("https://{domain}")
    } else {
        format!("https://{domain}/{repo_name}")
    }
}

/// Owner name out of a `https://<owner>.github.io...` site root.
///
/// The owner keeps the spelling of `site_root`; the parsed host is lowercased.
pub fn pages_owner(site_root: &str) -> Option<String> {
    let url = Url::parse(site_root).ok()?;
    if url.scheme() != "https" {
        return None;
    }
    let host = site_root
        .strip_prefix("https://")?
        .split(['/', '?', '#'])
        .next()?;
    if !url.host_str().is_some_and(|parsed| parsed.eq_ignore_ascii_case(host)) {
        return None;
    }
    let owner = host.strip_suffix(PAGES_DOMAIN)?;
    if owner.is_empty() || owner.contains('.') {
        return None;
    }
    Some(owner.to_string())
}

/// Whether `value` parses as an absolute URL with a host.
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}
