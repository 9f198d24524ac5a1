use crate::filter::{UrlFilter, is_http};
use crate::parsers::text;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

/// Elements whose subtree is never human-visible prose
const SKIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Image source attributes in priority order, lazy-load fallbacks last
const IMAGE_SOURCE_ATTRS: [&str; 4] = ["src", "data-src", "data-lazy-src", "data-original"];

/// Content roots in priority order
static ROOT_SELECTORS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    ["main", "article", "body"].map(|tag| Selector::parse(tag).expect("valid selector"))
});
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Extracts cleaned visible text from an HTML page
pub fn extract_text(html: &str) -> String {
    text_from_document(&Html::parse_document(html))
}

/// Extracts up to `max_images` distinct absolute image URLs
pub fn extract_images(html: &str, base_url: &Url, max_images: usize) -> Vec<String> {
    images_from_document(&Html::parse_document(html), base_url, max_images)
}

/// Extracts up to `max_links` distinct same-site page links
pub fn extract_links(html: &str, base_url: &Url, max_links: usize) -> Vec<Url> {
    links_from_document(&Html::parse_document(html), base_url, max_links)
}

pub(crate) fn text_from_document(doc: &Html) -> String {
    let root = ROOT_SELECTORS
        .iter()
        .find_map(|selector| doc.select(selector).find(|el| !is_hidden(el)))
        .unwrap_or_else(|| doc.root_element());

    let mut parts = Vec::new();
    collect_text(root, &mut parts);
    text::clean(&parts.join("\n"))
}

/// Whether the element sits inside a non-content subtree
fn is_hidden(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| SKIPPED_TAGS.contains(&ancestor.value().name()))
}

/// Collects text nodes in document order, skipping non-content subtrees
fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            parts.push(&**text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !SKIPPED_TAGS.contains(&child_element.value().name()) {
                collect_text(child_element, parts);
            }
        }
    }
}

pub(crate) fn images_from_document(
    doc: &Html,
    base_url: &Url,
    max_images: usize,
) -> Vec<String> {
    let mut images = Vec::new();
    if max_images == 0 {
        return images;
    }

    let mut seen = HashSet::new();
    for img in doc.select(&IMG_SELECTOR) {
        let Some(source) = IMAGE_SOURCE_ATTRS
            .iter()
            .filter_map(|attr| img.value().attr(attr))
            .map(str::trim)
            .find(|value| !value.is_empty())
        else {
            continue;
        };

        let Ok(resolved) = base_url.join(source) else {
            ::log::trace!("Skipping unresolvable image source: {}", source);
            continue;
        };
        // Rejects data: URIs along with every other non-web scheme
        if !is_http(&resolved) {
            continue;
        }

        let normalized = resolved.to_string();
        if seen.insert(normalized.clone()) {
            images.push(normalized);
            if images.len() >= max_images {
                break;
            }
        }
    }

    ::log::debug!("HTML parser found {} images on {}", images.len(), base_url);
    images
}

pub(crate) fn links_from_document(doc: &Html, base_url: &Url, max_links: usize) -> Vec<Url> {
    let mut links = Vec::new();
    if max_links == 0 {
        return links;
    }

    let url_filter = UrlFilter::same_site(base_url);
    let mut seen = HashSet::new();

    for anchor in doc.select(&ANCHOR_SELECTOR) {
        let href = anchor.value().attr("href").unwrap_or_default().trim();
        if is_non_navigational(href) {
            continue;
        }

        let Ok(resolved) = base_url.join(href) else {
            continue;
        };
        if !url_filter.should_crawl(&resolved) {
            ::log::trace!("URL filter rejected: {}", resolved);
            continue;
        }

        let normalized = url_filter.normalize_url(&resolved);
        if seen.insert(normalized.to_string()) {
            links.push(normalized);
            if links.len() >= max_links {
                break;
            }
        }
    }

    ::log::debug!(
        "HTML parser found {} internal links on {}",
        links.len(),
        base_url
    );
    links
}

/// Empty, fragment-only, mail and phone targets never lead to another page
fn is_non_navigational(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    href.is_empty()
        || href.starts_with('#')
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
}
