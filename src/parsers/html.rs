use crate::loader::LoadedPage;
use scraper::{Html, Selector};
use url::Url;

/// Extracts the title, meta name/content pairs and outbound links from
/// page source.
pub fn parse(html: &str, base: &Url) -> LoadedPage {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    // A meta tag contributes a pair when it has a content attribute and
    // either a name or a property (og:* tags use property).
    let meta_selector = Selector::parse("meta").unwrap();
    let meta_pairs = doc
        .select(&meta_selector)
        .filter_map(|e| {
            let tag = e.value();
            let name = tag.attr("name").or_else(|| tag.attr("property"))?;
            let content = tag.attr("content")?;
            Some((name.to_string(), content.to_string()))
        })
        .collect::<Vec<_>>();

    let link_selector = Selector::parse("a[href]").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| absolutize(href, base))
        .collect::<Vec<String>>();

    ::log::debug!("Found {} links in {}", links.len(), base);

    LoadedPage {
        title,
        meta_pairs,
        links,
    }
}

/// Turns an href into an absolute URL string. Absolute http(s) hrefs pass
/// through verbatim (validation is the engine's job); relative hrefs are
/// resolved against the page URL; fragment-only and non-navigational
/// schemes are dropped.
fn absolutize(href: &str, base: &Url) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    if href.starts_with("mailto:") || href.starts_with("javascript:") || href.starts_with("tel:") {
        return None;
    }
    let resolved = base.join(href).ok()?;
    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }
    Some(resolved.to_string())
}
