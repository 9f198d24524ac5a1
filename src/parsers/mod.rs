pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use scraper::Html;
use url::Url;

/// Caps applied while parsing a single page
#[derive(Debug, Clone, Copy)]
pub struct ParseLimits {
    /// Maximum number of image URLs to collect
    pub max_images: usize,
    /// Maximum number of internal links to collect; `None` skips link discovery
    pub max_links: Option<usize>,
}

/// Result of parsing a page
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Cleaned visible text
    pub content: String,
    /// Absolute image URLs in discovery order
    pub images: Vec<String>,
    /// Same-site page links in discovery order
    pub links: Vec<Url>,
}

/// Runs every extractor over a single parse of the page
pub struct Parser;

impl Parser {
    /// Parse an HTML page fetched from `base_url`
    pub fn parse(html: &str, base_url: &Url, limits: &ParseLimits) -> ParseResult {
        let doc = Html::parse_document(html);
        if !doc.errors.is_empty() {
            ::log::trace!("{} parse errors in {}", doc.errors.len(), base_url);
        }

        let links = match limits.max_links {
            Some(max_links) => html::links_from_document(&doc, base_url, max_links),
            None => Vec::new(),
        };

        ParseResult {
            content: html::text_from_document(&doc),
            images: html::images_from_document(&doc, base_url, limits.max_images),
            links,
        }
    }
}
