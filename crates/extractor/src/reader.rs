// ABOUTME: Thin adapter over the dom_smoothie Readability port.
// ABOUTME: Builds the document from HTML, runs extraction with default settings, and maps failures.

use dom_smoothie::Readability;

use crate::article::Article;
use crate::error::ExtractError;

/// Run readability extraction over a decoded HTML document.
///
/// `url` is the document URL; relative links in the extracted content are
/// resolved against it. No tuning is applied to the readability config.
///
/// # Errors
/// * `Parse` if the document cannot be prepared for extraction.
/// * `NoContent` if no article is found or its text is blank.
pub fn extract_readable(html: &str, url: &str) -> Result<Article, ExtractError> {
    let mut readability = Readability::new(html, Some(url), None).map_err(|e| {
        ExtractError::parse(
            url,
            "Readability",
            Some(anyhow::anyhow!("failed to build document: {}", e)),
        )
    })?;

    let parsed = readability.parse().map_err(|e| {
        ExtractError::no_content(
            url,
            "Readability",
            Some(anyhow::anyhow!("{}", e)),
        )
    })?;

    let content: String = parsed.content.into();
    let text_content: String = parsed.text_content.into();

    if text_content.trim().is_empty() {
        return Err(ExtractError::no_content(
            url,
            "Readability",
            Some(anyhow::anyhow!("article text is empty")),
        ));
    }

    log::debug!(
        "readability extracted {} chars of text from {}",
        text_content.chars().count(),
        url
    );

    Ok(Article {
        url: url.to_string(),
        title: parsed.title,
        byline: non_empty(parsed.byline),
        excerpt: non_empty(parsed.excerpt),
        site_name: non_empty(parsed.site_name),
        language: non_empty(parsed.lang),
        length: text_content.chars().count(),
        content,
        text_content,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
