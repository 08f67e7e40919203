// ABOUTME: Output format converters for extracted article HTML.
// ABOUTME: Handles conversion to Markdown and plain text; HTML passes through untouched.

//! Output format conversion module.
//!
//! Readability returns article HTML. These helpers turn it into Markdown
//! (via `htmd`) or whitespace-normalized plain text (via `scraper`).

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static BR_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").unwrap());
static BLOCK_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(p|div|h[1-6]|li|blockquote|pre|tr|section|article)>").unwrap());
static HSPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static MULTI_NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Convert HTML to Markdown using htmd.
///
/// Script, style and noscript elements are dropped. Runs of blank lines are
/// collapsed to a single blank line.
pub fn html_to_markdown(html: &str) -> String {
    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript"])
        .build();

    let md = converter
        .convert(html)
        .unwrap_or_else(|_| html_to_text(html));

    collapse_blank_lines_to_two(md.trim())
}

/// Convert HTML to plain text.
///
/// Block boundaries and `<br>` become newlines; other whitespace is collapsed.
pub fn html_to_text(html: &str) -> String {
    let preprocessed = BR_TAG_RE.replace_all(html, "\n");
    let preprocessed = BLOCK_END_RE.replace_all(&preprocessed, "$0\n");

    let fragment = Html::parse_fragment(&preprocessed);
    let raw_text: String = fragment.root_element().text().collect::<Vec<_>>().join("");

    let normalized = HSPACE_RE.replace_all(&raw_text, " ");
    let lines: Vec<&str> = normalized.split('\n').map(str::trim).collect();
    let joined = lines.join("\n");

    collapse_newlines_to_one(&joined).trim().to_string()
}

fn collapse_blank_lines_to_two(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n\n").to_string()
}

fn collapse_newlines_to_one(text: &str) -> String {
    MULTI_NEWLINE_RE.replace_all(text, "\n").to_string()
}
