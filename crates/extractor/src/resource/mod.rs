// ABOUTME: Resource handling module for fetching web pages.
// ABOUTME: Handles URL validation, the HTTP GET, content-length limits, and charset decoding.

use std::collections::HashMap;

use bytes::{Bytes, BytesMut};

use crate::error::ExtractError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub accept_error_status: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers: HashMap::new(),
            accept_error_status: true,
        }
    }
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset from the content-type header when present.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Parse a URL and require an http or https scheme.
pub fn validate_url(url: &str, op: &str) -> Result<url::Url, ExtractError> {
    if url.is_empty() {
        return Err(ExtractError::invalid_url(
            url,
            op,
            Some(anyhow::anyhow!("URL is empty")),
        ));
    }

    let parsed = url::Url::parse(url).map_err(|e| {
        ExtractError::invalid_url(url, op, Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ExtractError::invalid_url(
            url,
            op,
            Some(anyhow::anyhow!("scheme must be http or https")),
        )),
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

fn too_large(url: &str) -> ExtractError {
    ExtractError::fetch(
        url,
        "Fetch",
        Some(anyhow::anyhow!(
            "content too large (limit {} bytes)",
            MAX_CONTENT_LENGTH
        )),
    )
}

/// Read the response body chunk by chunk, stopping once it exceeds `MAX_CONTENT_LENGTH`.
async fn read_body(mut response: reqwest::Response, url: &str) -> Result<Bytes, ExtractError> {
    let mut buf = BytesMut::new();
    loop {
        let chunk = response.chunk().await.map_err(|e| {
            if e.is_timeout() {
                ExtractError::from_reqwest(url, "Fetch", e)
            } else {
                ExtractError::fetch(
                    url,
                    "Fetch",
                    Some(anyhow::anyhow!("failed to read body: {}", e)),
                )
            }
        })?;
        let Some(chunk) = chunk else {
            break;
        };
        if buf.len() + chunk.len() > MAX_CONTENT_LENGTH {
            return Err(too_large(url));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

/// Fetch a resource from the given URL.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ExtractError> {
    let parsed_url = validate_url(url, "Fetch")?;

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    log::debug!("GET {}", url);
    let response = request
        .send()
        .await
        .map_err(|e| ExtractError::from_reqwest(url, "Fetch", e))?;

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(too_large(url));
        }
    }

    let status = response.status();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if !status.is_success() {
        if !opts.accept_error_status {
            return Err(ExtractError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
            ));
        }
        log::warn!(
            "{} answered with HTTP status {}; extracting from the response body anyway",
            url,
            status.as_u16()
        );
    }

    let body = read_body(response, url).await?;

    log::debug!(
        "fetched {} bytes from {} (status {}, content-type {:?})",
        body.len(),
        final_url,
        status.as_u16(),
        content_type
    );

    Ok(FetchResult {
        status: status.as_u16(),
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
