//! Canonical URLs for the service, derived from the configured host and port.

/// Builds `http://<host>[:<port>]/...` URLs. The port is omitted when it is 80.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    base: String,
}

impl SiteUrls {
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        let base = if port == 80 {
            format!("http://{host}/")
        } else {
            format!("http://{host}:{port}/")
        };
        Self { base }
    }

    /// Base URL, always with a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn aside_url(&self, id: i64) -> String {
        format!("{}asides/{id}", self.base)
    }

    #[must_use]
    pub fn feed_url(&self) -> String {
        format!("{}asides.atom", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_non_default_port() {
        let urls = SiteUrls::new("localhost", 4567);
        assert_eq!(urls.base(), "http://localhost:4567/");
        assert_eq!(urls.aside_url(1), "http://localhost:4567/asides/1");
        assert_eq!(urls.feed_url(), "http://localhost:4567/asides.atom");
    }

    #[test]
    fn omits_port_80() {
        let urls = SiteUrls::new("example.com", 80);
        assert_eq!(urls.base(), "http://example.com/");
        assert_eq!(urls.aside_url(42), "http://example.com/asides/42");
    }
}
