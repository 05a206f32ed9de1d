// src/core/net.rs
// Blocking HTTPS GET. One client per session; connections are pooled by reqwest.

use std::time::Duration;

use reqwest::{blocking::Client, Url};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::source::SourceError;

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Anything but 2xx is an error.
    pub fn get(&self, url: &str) -> Result<String, SourceError> {
        logd!("Net: GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

/// Resolve a possibly relative `href` against the page it was found on.
pub fn resolve(base: &str, href: &str) -> Result<String, SourceError> {
    let url = Url::parse(base)
        .and_then(|b| b.join(href))
        .map_err(|e| SourceError::Url(format!("{href} (base {base}): {e}")))?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_and_absolute() {
        assert_eq!(
            resolve("https://svlabo.jp/", "blog-entry-1467.html").unwrap(),
            "https://svlabo.jp/blog-entry-1467.html"
        );
        assert_eq!(
            resolve("https://svlabo.jp/page-2.html", "/blog-entry-1.html").unwrap(),
            "https://svlabo.jp/blog-entry-1.html"
        );
        assert_eq!(
            resolve("https://svlabo.jp/", "https://example.com/x").unwrap(),
            "https://example.com/x"
        );
    }
}
