use std::time::Duration;

use kryds_types::WordList;
use reqwest::Url;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderName, HeaderValue, REFERER,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use crate::HelperError;
use crate::extract::extract_words;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.150 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

/// Header set the solution sites expect from a real browser.
///
/// Accept-Encoding is left to reqwest, which only advertises the codecs it
/// can decode.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("http://google.com"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(HeaderName::from_static("dnt"), HeaderValue::from_static("1"));
    headers
}

/// Shared GET-and-scrape plumbing for the language helpers
#[derive(Clone)]
pub struct HelperClient {
    client: reqwest::Client,
}

impl HelperClient {
    pub fn new(timeout: Duration) -> Result<Self, HelperError> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// `base` with `segments` appended as percent-encoded path segments
    pub fn url(base: &str, segments: &[&str]) -> Result<Url, HelperError> {
        let mut url =
            Url::parse(base).map_err(|e| HelperError::InvalidUrl(format!("{base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| HelperError::InvalidUrl(format!("{base}: cannot be a base")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Body of a 2xx response
    pub async fn get_html(&self, url: Url) -> Result<String, HelperError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream {} answered HTTP {}", response.url(), status);
            return Err(HelperError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Fetch a results page and scrape the solution words off it
    pub async fn fetch_words(&self, url: Url) -> Result<WordList, HelperError> {
        let html = self.get_html(url).await?;
        let words = extract_words(&html);
        tracing::debug!("Extracted {} words", words.len());
        Ok(words)
    }
}
