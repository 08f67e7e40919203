// ABOUTME: The main Client struct that fetches pages and runs readability extraction on them.
// ABOUTME: Provides async extract() for URLs and extract_html() for HTML already in hand.

use crate::article::Article;
use crate::error::ExtractError;
use crate::options::{ClientBuilder, Options};
use crate::reader::extract_readable;
use crate::resource::{fetch, validate_url, FetchOptions};

/// Fetches web pages and extracts their readable content.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, ExtractError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(&opts.user_agent)
                    .gzip(true)
                    .brotli(true)
                    .deflate(true);
                if let Some(timeout) = opts.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    ExtractError::fetch(
                        "",
                        "BuildClient",
                        Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?
            }
        };

        Ok(Self { opts, http_client })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch the page at `url` and extract its readable content.
    ///
    /// The final URL after redirects is used as the document URL, so relative
    /// links in the article resolve against the page that was actually served.
    pub async fn extract(&self, url: &str) -> Result<Article, ExtractError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            accept_error_status: self.opts.accept_error_status,
        };

        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let html = fetched.text();

        let mut article = extract_readable(&html, &fetched.final_url).map_err(|mut e| {
            e.url = url.to_string();
            e
        })?;
        if fetched.final_url != url {
            log::debug!("{} redirected to {}", url, fetched.final_url);
        }
        article.url = fetched.final_url;
        Ok(article)
    }

    /// Extract readable content from HTML that has already been loaded.
    ///
    /// `url` is the document URL and must be http or https.
    pub fn extract_html(&self, html: &str, url: &str) -> Result<Article, ExtractError> {
        validate_url(url, "ExtractHtml")?;
        extract_readable(html, url)
    }

    /// Fetch `url`, extract it, and render the content as the configured content type.
    pub async fn extract_content(&self, url: &str) -> Result<String, ExtractError> {
        let article = self.extract(url).await?;
        Ok(article.render(self.opts.content_type))
    }
}
