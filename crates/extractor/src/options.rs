// ABOUTME: Configuration options for the extractor including ContentType, Options, and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::client::Client;
use crate::error::ExtractError;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("extractor/", env!("CARGO_PKG_VERSION"));

/// The format the extracted article is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContentType {
    #[default]
    Html,
    #[value(alias = "md")]
    Markdown,
    #[value(alias = "txt")]
    Text,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Html => "html",
            ContentType::Markdown => "markdown",
            ContentType::Text => "text",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => ContentType::Markdown,
            "text" | "txt" => ContentType::Text,
            _ => ContentType::Html,
        }
    }
}

/// Configuration options for the extractor client.
///
/// The defaults reproduce a bare fetch: no timeout, no extra headers, and
/// error statuses are still handed to the extraction step.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    pub accept_error_status: bool,
    pub content_type: ContentType,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            accept_error_status: true,
            content_type: ContentType::Html,
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Whether non-2xx responses are still passed on to extraction.
    pub fn accept_error_status(mut self, accept: bool) -> Self {
        self.opts.accept_error_status = accept;
        self
    }

    /// Set the content type produced by `Client::extract_content`.
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.opts.content_type = content_type;
        self
    }

    /// Use a custom HTTP client. Timeout and User-Agent settings are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, ExtractError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
