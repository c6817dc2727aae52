use crate::{UrlError, UrlResult};
use url::Url;

/// Returns the authority of a URL as `host[:port]`
///
/// The port only appears when it differs from the scheme's default, so
/// `https://lme.jp:443/` yields `lme.jp` while a local mock server yields
/// `127.0.0.1:54321`. Hosts are lowercased by the URL parser.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use manual_mapper::url::authority;
///
/// let url = Url::parse("https://LME.jp/manual/").unwrap();
/// assert_eq!(authority(&url), "lme.jp");
///
/// let url = Url::parse("http://127.0.0.1:8080/manual/").unwrap();
/// assert_eq!(authority(&url), "127.0.0.1:8080");
/// ```
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Removes the fragment (everything from the first `#`) from a URL
pub fn strip_fragment(url: &mut Url) {
    url.set_fragment(None);
}

/// Parses a URL into the canonical form used for the frontier and visited set
///
/// The canonical form is the parser's serialization with the fragment
/// removed. Only HTTP(S) URLs with a host are accepted.
///
/// # Examples
///
/// ```
/// use manual_mapper::url::canonicalize;
///
/// let url = canonicalize("https://LME.jp/manual/page#section").unwrap();
/// assert_eq!(url.as_str(), "https://lme.jp/manual/page");
/// ```
pub fn canonicalize(url_str: &str) -> UrlResult<Url> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    strip_fragment(&mut url);
    Ok(url)
}

/// Returns the path component of a URL string
///
/// Unparseable input yields an empty path rather than an error.
pub fn page_path(url_str: &str) -> String {
    Url::parse(url_str)
        .map(|url| url.path().to_string())
        .unwrap_or_default()
}
