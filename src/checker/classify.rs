// src/checker/classify.rs
// =============================================================================
// Decides whether a link string is a remote URL or a local file.
//
// A link is remote when it is a well-formed absolute URL with one of the
// registered schemes (http, https, ftp) and a real host, written out in full
// as `scheme://host...`. Everything else, including relative paths, absolute
// filesystem paths and things like `C:\docs\index.html`, is a local file.
//
// Why not just check for "http"?
// - `Url::parse` is lenient: it happily turns "http:foo" into "http://foo/"
// - Requiring the explicit "scheme://" prefix and a host keeps odd relative
//   links from being mistaken for URLs
// =============================================================================

use url::Url;

/// Schemes that make a link a remote URL.
const REGISTERED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// How a link will be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    RemoteUrl,
    LocalFile,
}

/// Classifies a link string.
pub fn classify(link: &str) -> LinkKind {
    if is_remote_url(link) {
        LinkKind::RemoteUrl
    } else {
        LinkKind::LocalFile
    }
}

/// True when `link` is an absolute URL with a registered scheme and a host.
pub fn is_remote_url(link: &str) -> bool {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let scheme = url.scheme();
    if !REGISTERED_SCHEMES.contains(&scheme) {
        return false;
    }

    // Must be spelled out as "scheme://", the parser would accept "http:foo"
    let prefix = format!("{}://", scheme);
    let spelled_out = link
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(&prefix))
        .unwrap_or(false);
    if !spelled_out {
        return false;
    }

    matches!(url.host_str(), Some(host) if !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_remote() {
        assert_eq!(classify("http://example.com"), LinkKind::RemoteUrl);
        assert_eq!(classify("https://example.com/a/b?c=d#e"), LinkKind::RemoteUrl);
        assert_eq!(classify("HTTPS://Example.com/"), LinkKind::RemoteUrl);
    }

    #[test]
    fn test_ftp_is_remote() {
        assert!(is_remote_url("ftp://ftp.example.com/pub/file.txt"));
    }

    #[test]
    fn test_localhost_is_remote() {
        assert!(is_remote_url("http://localhost/x"));
        assert!(is_remote_url("http://127.0.0.1:8080/"));
    }

    #[test]
    fn test_paths_are_local() {
        assert_eq!(classify("/var/www/index.html"), LinkKind::LocalFile);
        assert_eq!(classify("../up/page.html"), LinkKind::LocalFile);
        assert_eq!(classify("page.html#section"), LinkKind::LocalFile);
        assert_eq!(classify("C:\\docs\\index.html"), LinkKind::LocalFile);
        assert_eq!(classify(""), LinkKind::LocalFile);
    }

    #[test]
    fn test_unregistered_schemes_are_local() {
        assert!(!is_remote_url("file:///etc/hosts"));
        assert!(!is_remote_url("gopher://example.com/"));
        assert!(!is_remote_url("data:text/plain,hello"));
    }

    #[test]
    fn test_scheme_without_slashes_is_local() {
        assert!(!is_remote_url("http:foo.html"));
        assert!(!is_remote_url("http:/foo.html"));
    }
}
