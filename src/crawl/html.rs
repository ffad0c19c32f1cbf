// src/crawl/html.rs
// =============================================================================
// Pulls image sources and hyperlinks out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM, forgiving broken markup the way browsers do
// - Supports CSS selectors for finding elements
//
// Malformed HTML never fails here. The worst case is a page that yields no
// images and no links.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Everything worth following on one page, as absolute http(s) URLs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// From <img src> or, when src is missing, <img data-src>
    pub images: Vec<Url>,
    /// From <a href>, before any domain filtering
    pub links: Vec<Url>,
}

/// Extracts image and link URLs from `html`, resolving relative references
/// against `page_url`. Both lists are deduplicated, keeping first-seen order.
pub fn extract_page_links(html: &str, page_url: &Url) -> PageLinks {
    let document = Html::parse_document(html);

    // Constant selectors, known to be valid
    let img_selector = Selector::parse("img").expect("img selector");
    let anchor_selector = Selector::parse("a[href]").expect("anchor selector");

    let images = document
        .select(&img_selector)
        .filter_map(|img| {
            let element = img.value();
            element
                .attr("src")
                .filter(|src| !src.trim().is_empty())
                .or_else(|| element.attr("data-src"))
        })
        .filter_map(|src| resolve_image(page_url, src))
        .collect();

    let links = document
        .select(&anchor_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .collect();

    PageLinks {
        images: dedupe_urls(images),
        links: dedupe_urls(links),
    }
}

fn resolve_image(base: &Url, src: &str) -> Option<Url> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    base.join(src).ok().filter(is_http)
}

// Resolves a link (possibly relative) to an absolute URL
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    // Skip anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    base.join(href).ok().filter(is_http)
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn dedupe_urls(values: Vec<Url>) -> Vec<Url> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|url| seen.insert(url.as_str().to_string()))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does Url::join do?
//    - It resolves a link the way a browser would
//    - "https://example.com/gallery/index.html" + "c.gif"
//      -> "https://example.com/gallery/c.gif"
//    - "//cdn.example.com/x.jpg" keeps the page's scheme
//
// 2. Why filter_map?
//    - It maps and drops the None results in one step
//    - Every link that fails to resolve simply disappears
//
// 3. Why does dedupe_urls use a HashSet AND a Vec?
//    - HashSet answers "seen it before?" quickly
//    - Vec keeps the order in which things appeared on the page
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://example.com/gallery/index.html").unwrap()
    }

    fn strings(urls: &[Url]) -> Vec<&str> {
        urls.iter().map(Url::as_str).collect()
    }

    #[test]
    fn test_collects_src_and_data_src() {
        let html = r#"
            <img src="https://cdn.example.com/a.jpg">
            <img data-src="/lazy/b.png">
            <img src="c.gif" data-src="ignored.gif">
        "#;
        let found = extract_page_links(html, &page());
        assert_eq!(
            strings(&found.images),
            vec![
                "https://cdn.example.com/a.jpg",
                "https://example.com/lazy/b.png",
                "https://example.com/gallery/c.gif",
            ]
        );
    }

    #[test]
    fn test_empty_src_falls_back_to_data_src() {
        let html = r#"<img src="" data-src="real.jpg"><img>"#;
        let found = extract_page_links(html, &page());
        assert_eq!(strings(&found.images), vec!["https://example.com/gallery/real.jpg"]);
    }

    #[test]
    fn test_skips_inline_data_images() {
        let html = r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#;
        let found = extract_page_links(html, &page());
        assert!(found.images.is_empty());
    }

    #[test]
    fn test_resolves_links() {
        let html = r#"
            <a href="/about">About</a>
            <a href="../contact">Contact</a>
            <a href="https://other.com/page">Elsewhere</a>
        "#;
        let found = extract_page_links(html, &page());
        assert_eq!(
            strings(&found.links),
            vec![
                "https://example.com/about",
                "https://example.com/contact",
                "https://other.com/page",
            ]
        );
    }

    #[test]
    fn test_skips_special_links() {
        let html = r##"
            <a href="#top">Top</a>
            <a href="mailto:hi@example.com">Mail</a>
            <a href="tel:+15551234">Call</a>
            <a href="javascript:void(0)">JS</a>
            <a href="">Empty</a>
        "##;
        let found = extract_page_links(html, &page());
        assert!(found.links.is_empty());
    }

    #[test]
    fn test_deduplicates_keeping_first_seen_order() {
        let html = r#"
            <img src="/x.jpg"><img src="/y.jpg"><img src="https://example.com/x.jpg">
            <a href="/b">B</a><a href="/a">A</a><a href="/b">B again</a>
        "#;
        let found = extract_page_links(html, &page());
        assert_eq!(
            strings(&found.images),
            vec!["https://example.com/x.jpg", "https://example.com/y.jpg"]
        );
        assert_eq!(
            strings(&found.links),
            vec!["https://example.com/b", "https://example.com/a"]
        );
    }

    #[test]
    fn test_malformed_html_yields_nothing() {
        let found = extract_page_links("<<<not really html", &page());
        assert_eq!(found, PageLinks::default());

        let found = extract_page_links("\u{0}\u{1}binary junk", &page());
        assert_eq!(found, PageLinks::default());
    }
}
