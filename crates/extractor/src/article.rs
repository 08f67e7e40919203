// ABOUTME: Article struct holding the readability result for one page.
// ABOUTME: Renders the extracted content as HTML, Markdown, or plain text.

use serde::{Deserialize, Serialize};

use crate::formats::{html_to_markdown, html_to_text};
use crate::options::ContentType;

/// The readable content extracted from a page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Article {
    /// Document URL the content was extracted against.
    pub url: String,
    pub title: String,
    pub byline: Option<String>,
    pub excerpt: Option<String>,
    pub site_name: Option<String>,
    pub language: Option<String>,
    /// Extracted article HTML, exactly as returned by readability.
    pub content: String,
    pub text_content: String,
    /// Length of `text_content` in characters.
    pub length: usize,
}

impl Article {
    /// Render the article content in the requested format.
    ///
    /// HTML is returned verbatim.
    pub fn render(&self, content_type: ContentType) -> String {
        match content_type {
            ContentType::Html => self.content.clone(),
            ContentType::Markdown => html_to_markdown(&self.content),
            ContentType::Text => html_to_text(&self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Article {
        Article {
            url: "https://example.com/post".to_string(),
            title: "Post".to_string(),
            content: "<div><h2>Heading</h2><p>First <em>line</em></p><p>Second line</p></div>"
                .to_string(),
            text_content: "Heading First line Second line".to_string(),
            length: 30,
            ..Default::default()
        }
    }

    #[test]
    fn render_html_is_verbatim() {
        let article = sample();
        assert_eq!(article.render(ContentType::Html), article.content);
    }

    #[test]
    fn render_markdown() {
        let md = sample().render(ContentType::Markdown);
        assert!(md.contains("Heading") && !md.contains("<h2>"), "got: {}", md);
        assert!(md.contains("First *line*") || md.contains("First _line_"), "got: {}", md);
    }

    #[test]
    fn render_text_strips_tags() {
        let text = sample().render(ContentType::Text);
        assert!(!text.contains('<'));
        assert!(text.contains("Second line"));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["title"], "Post");
        assert_eq!(json["byline"], serde_json::Value::Null);
        assert_eq!(json["length"], 30);
    }
}
