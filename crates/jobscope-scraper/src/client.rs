//! HTTP client for the listing pages.

use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Result of one page request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFetch {
    /// 2xx response; the body is the page's HTML.
    Body(String),
    /// Any other status. The collector treats this as "blocked" and stops.
    Rejected { status: u16 },
}

/// Thin wrapper over `reqwest::Client` bound to one listing endpoint.
///
/// Sends a fixed `User-Agent` and never retries. No request timeout is set,
/// so reqwest's defaults apply.
pub struct JobBoardClient {
    client: Client,
    base_url: Url,
}

impl JobBoardClient {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ScraperError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ScraperError> {
        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for the zero-based `page_index`.
    ///
    /// The first page is the base URL untouched; later pages add a one-based
    /// `page` query parameter.
    #[must_use]
    pub fn page_url(&self, page_index: usize) -> Url {
        let mut url = self.base_url.clone();
        if page_index > 0 {
            url.query_pairs_mut()
                .append_pair("page", &(page_index + 1).to_string());
        }
        url
    }

    /// Issues one GET for `page_index`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on transport failure or if the body
    /// cannot be read. A non-success status is not an error; it comes back as
    /// [`PageFetch::Rejected`].
    pub async fn fetch_page(&self, page_index: usize) -> Result<PageFetch, ScraperError> {
        let url = self.page_url(page_index);
        tracing::debug!(%url, "fetching listing page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(PageFetch::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(PageFetch::Body(response.text().await?))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
