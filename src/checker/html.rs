// src/checker/html.rs
// =============================================================================
// This module extracts raw links from a local HTML file.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Three element/attribute pairs carry links we care about:
//   <a href="...">, <frame src="...">, <img src="...">
//
// Links come back exactly as written in the file (no resolving here); an
// element missing its attribute gives an empty link. The
// engine decides whether each one is a URL or a local path. Links with the
// `javascript:` or `mailto:` prefix are split off so they can be logged and
// then ignored.
// =============================================================================

use scraper::{Html, Selector};

/// The elements and the attribute that holds their link.
const LINK_ATTRIBUTES: [(&str, &str); 3] = [("a", "href"), ("frame", "src"), ("img", "src")];

/// Prefixes of links that are never followed.
const IGNORED_PREFIXES: [&str; 2] = ["javascript:", "mailto:"];

/// Links found in one HTML document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// Links to follow, in document order.
    pub links: Vec<String>,
    /// `javascript:` / `mailto:` links, kept only for logging.
    pub ignored: Vec<String>,
}

/// Extracts the link of every `a`, `frame` and `img` element.
///
/// An element without its link attribute yields an empty link, which the
/// engine resolves to the directory of the page.
///
/// Example:
///   html = `<a href="docs/">Docs</a><img src="logo.png">`
///   result.links = ["docs/", "logo.png"]
pub fn extract_html_links(html: &str) -> ExtractedLinks {
    let document = Html::parse_document(html);

    // One combined selector keeps document order across the three kinds
    let selector_text = LINK_ATTRIBUTES
        .iter()
        .map(|(element, _)| *element)
        .collect::<Vec<_>>()
        .join(", ");
    let selector = Selector::parse(&selector_text).expect("link selector is a valid constant");

    let mut extracted = ExtractedLinks::default();

    for element in document.select(&selector) {
        let name = element.value().name();
        let attribute = LINK_ATTRIBUTES
            .iter()
            .find(|(element, _)| element.eq_ignore_ascii_case(name))
            .map(|(_, attribute)| *attribute);

        let link = attribute
            .and_then(|attribute| element.value().attr(attribute))
            .unwrap_or("")
            .to_string();

        if is_ignored(&link) {
            extracted.ignored.push(link);
        } else {
            extracted.links.push(link);
        }
    }

    extracted
}

fn is_ignored(link: &str) -> bool {
    IGNORED_PREFIXES.iter().any(|prefix| link.starts_with(prefix))
}
