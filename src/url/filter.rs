use crate::config::TargetConfig;
use crate::url::normalize::authority;
use url::Url;

/// Decides whether a URL belongs to the mapped site
///
/// A URL is in scope when all of the following hold:
/// 1. It parses
/// 2. Its authority (`host[:port]`) equals the target host
/// 3. Its path starts with the configured prefix
/// 4. Its path does not end with an excluded extension (case-sensitive)
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    host: String,
    path_prefix: String,
    excluded_extensions: Vec<String>,
}

impl ScopeFilter {
    /// Creates a filter from explicit parts
    pub fn new(
        host: impl Into<String>,
        path_prefix: impl Into<String>,
        excluded_extensions: Vec<String>,
    ) -> Self {
        Self {
            host: host.into().to_lowercase(),
            path_prefix: path_prefix.into(),
            excluded_extensions,
        }
    }

    /// Creates a filter from the `[target]` configuration section
    pub fn from_config(config: &TargetConfig) -> Self {
        Self::new(
            config.host.clone(),
            config.path_prefix.clone(),
            config.excluded_extensions.clone(),
        )
    }

    /// Returns true if the URL string is in scope
    ///
    /// Malformed URLs are simply out of scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use manual_mapper::url::ScopeFilter;
    ///
    /// let filter = ScopeFilter::new("lme.jp", "/manual/", vec![".png".to_string()]);
    /// assert!(filter.is_in_scope("https://lme.jp/manual/tutorial/"));
    /// assert!(!filter.is_in_scope("https://lme.jp/manual/logo.png"));
    /// assert!(!filter.is_in_scope("https://lme.jp/blog/"));
    /// assert!(!filter.is_in_scope("not a url"));
    /// ```
    pub fn is_in_scope(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.is_url_in_scope(&parsed),
            Err(_) => false,
        }
    }

    /// Same check as [`ScopeFilter::is_in_scope`] for an already parsed URL
    pub fn is_url_in_scope(&self, url: &Url) -> bool {
        if authority(url) != self.host {
            return false;
        }

        let path = url.path();
        if !path.starts_with(&self.path_prefix) {
            return false;
        }

        !self
            .excluded_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }
}
